// Integration tests for Magnificent Seven.
//
// These exercise the public API end-to-end: the selection engine's ranking
// properties, the HTTP player source against a local one-shot responder, and
// the app loop wiring a real `FplClient` to UI updates.

use std::collections::HashSet;
use std::sync::Arc;

use magnificent_seven::app::{self, AppState};
use magnificent_seven::config::SourceConfig;
use magnificent_seven::fetch::{FetchError, FplClient, PlayerSource};
use magnificent_seven::protocol::{UiUpdate, UserCommand};
use magnificent_seven::selection::{
    compare_magnificence, is_top_performer, max_magnificence, rank_by_magnificence,
    select_by_position, SelectionError, Showcase, FORMATION,
};
use magnificent_seven::squad::player::Player;

use chrono::Utc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

// ===========================================================================
// Test helpers
// ===========================================================================

fn player(code: u32, element_type: u8, goals: u32, assists: u32) -> Player {
    Player {
        code,
        web_name: format!("P{code}"),
        goals_scored: goals,
        assists,
        element_type,
        team_code: 1,
    }
}

fn codes(players: &[Player]) -> Vec<u32> {
    players.iter().map(|p| p.code).collect()
}

/// Deterministic pseudo-random squad covering all positions plus a few
/// unknown element types.
fn generated_squad(seed: u64, size: u32) -> Vec<Player> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as u32
    };
    (0..size)
        .map(|code| {
            let element_type = (next() % 6) as u8; // 0 and 5 are unknown
            player(code, element_type, next() % 8, next() % 8)
        })
        .collect()
}

const BOOTSTRAP_BODY: &str = r#"{
    "events": [{"id": 1}],
    "elements": [
        {"code": 1, "web_name": "Raya", "goals_scored": 0, "assists": 0, "element_type": 1, "team_code": 3},
        {"code": 2, "web_name": "Gabriel", "goals_scored": 10, "assists": 0, "element_type": 2, "team_code": 3},
        {"code": 3, "web_name": "Alexander-Arnold", "goals_scored": 3, "assists": 8, "element_type": 2, "team_code": 14},
        {"code": 4, "web_name": "Mykolenko", "goals_scored": 1, "assists": 1, "element_type": 2, "team_code": 11},
        {"code": 5, "web_name": "Salah", "goals_scored": 18, "assists": 12, "element_type": 3, "team_code": 14},
        {"code": 6, "web_name": "Haaland", "goals_scored": 22, "assists": 8, "element_type": 4, "team_code": 43}
    ],
    "teams": [
        {"code": 3, "name": "Arsenal"},
        {"code": 14, "name": "Liverpool"},
        {"code": 43, "name": "Man City"}
    ]
}"#;

/// Serve exactly one HTTP response on a random local port.
///
/// Returns the URL to request and a handle resolving to the raw request head.
async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/api/bootstrap-static/"), handle)
}

fn client_for(url: &str) -> FplClient {
    FplClient::from_config(&SourceConfig {
        url: url.to_string(),
        timeout_secs: 5,
        user_agent: "mag7-tests".into(),
    })
    .unwrap()
}

// ===========================================================================
// Selection engine properties
// ===========================================================================

#[test]
fn tie_break_prefers_more_goals() {
    let a = player(1, 3, 5, 2);
    let b = player(2, 3, 3, 4);
    assert_eq!(a.magnificence(), b.magnificence());
    assert_eq!(codes(&rank_by_magnificence(&[b.clone(), a.clone()])), vec![1, 2]);
    assert_eq!(codes(&rank_by_magnificence(&[a, b])), vec![1, 2]);
}

#[test]
fn defender_scenario_ranks_by_magnificence_and_excludes_third() {
    let players = vec![
        player(1, 1, 0, 0),
        player(2, 2, 10, 0),
        player(3, 2, 3, 8),
        player(4, 2, 1, 1),
    ];
    let defenders = select_by_position(&players, 2, 2);
    assert_eq!(codes(&defenders), vec![3, 2]);
    assert_eq!(defenders[0].magnificence(), 11);
    assert_eq!(defenders[1].magnificence(), 10);
}

#[test]
fn empty_collection_scenario() {
    assert!(select_by_position(&[], 1, 1).is_empty());
    assert_eq!(max_magnificence(&[]), Err(SelectionError::EmptyCollection));
}

#[test]
fn bucket_capacity_never_exceeded() {
    for seed in 0..50 {
        let squad = generated_squad(seed, 40);
        for (element_type, limit) in FORMATION {
            let available = squad.iter().filter(|p| p.element_type == element_type).count();
            let bucket = select_by_position(&squad, element_type, limit);
            assert!(bucket.len() <= limit);
            assert_eq!(bucket.len(), available.min(limit));
        }
    }
}

#[test]
fn buckets_are_exclusive_and_only_known_positions() {
    for seed in 0..50 {
        let squad = generated_squad(seed, 30);
        let showcase = Showcase::build(&squad, vec![], Utc::now());
        let mut seen = HashSet::new();
        for row in &showcase.rows {
            for p in &row.players {
                assert!(seen.insert(p.code), "seed {seed}: player {} twice", p.code);
                assert_eq!(p.element_type, row.position.element_type());
                assert!((1..=4).contains(&p.element_type));
            }
        }
    }
}

#[test]
fn buckets_are_sorted_by_comparator() {
    for seed in 0..50 {
        let squad = generated_squad(seed, 60);
        for (element_type, limit) in FORMATION {
            let bucket = select_by_position(&squad, element_type, limit);
            for pair in bucket.windows(2) {
                assert_ne!(
                    compare_magnificence(&pair[0], &pair[1]),
                    std::cmp::Ordering::Greater
                );
            }
        }
    }
}

#[test]
fn top_performer_uses_unfiltered_maximum() {
    // The best midfielder ranks fourth among midfielders and is not selected,
    // but a forward tied with him is. Both must be flagged.
    let players = vec![
        player(1, 3, 20, 0),
        player(2, 3, 20, 0),
        player(3, 3, 20, 0),
        player(4, 3, 19, 1),
        player(5, 4, 15, 5),
        player(6, 2, 1, 0),
    ];
    let max = max_magnificence(&players).unwrap();
    assert_eq!(max, 20);

    let showcase = Showcase::build(&players, vec![], Utc::now());
    assert!(!showcase.starters().any(|p| p.code == 4));
    assert!(is_top_performer(&players[3], max));
    let forward = showcase.starters().find(|p| p.code == 5).unwrap();
    assert!(showcase.is_top_performer(forward));
    assert!(!showcase.is_top_performer(&players[5]));
}

#[test]
fn rank_is_idempotent_on_generated_squads() {
    for seed in 0..20 {
        let squad = generated_squad(seed, 50);
        let once = rank_by_magnificence(&squad);
        assert_eq!(rank_by_magnificence(&once), once);
    }
}

// ===========================================================================
// HTTP player source
// ===========================================================================

#[tokio::test]
async fn fpl_client_fetches_and_parses_payload() {
    let (url, server) = serve_once("200 OK", BOOTSTRAP_BODY).await;
    let client = client_for(&url);

    let bootstrap = client.fetch_players_and_teams().await.unwrap();
    assert_eq!(bootstrap.players.len(), 6);
    assert_eq!(bootstrap.teams.len(), 3);
    assert_eq!(bootstrap.players[4].web_name, "Salah");

    let request = server.await.unwrap().to_lowercase();
    assert!(request.starts_with("get /api/bootstrap-static/"));
    assert!(request.contains("accept: application/json"));
    assert!(request.contains("user-agent: mag7-tests"));
}

#[tokio::test]
async fn fpl_client_reports_non_success_status() {
    let (url, _server) = serve_once("503 Service Unavailable", "{}").await;
    let err = client_for(&url).fetch_players_and_teams().await.unwrap_err();
    match err {
        FetchError::Status { status, .. } => assert_eq!(status, 503),
        other => panic!("expected Status error, got {other}"),
    }
}

#[tokio::test]
async fn fpl_client_reports_malformed_json() {
    let (url, _server) = serve_once("200 OK", "<html>not json</html>").await;
    let err = client_for(&url).fetch_players_and_teams().await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "got {err}");
}

#[tokio::test]
async fn fpl_client_reports_connection_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{addr}/"))
        .fetch_players_and_teams()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Network { .. }), "got {err}");
}

// ===========================================================================
// App loop end-to-end
// ===========================================================================

#[tokio::test]
async fn app_loop_loads_showcase_from_http_source() {
    let (url, _server) = serve_once("200 OK", BOOTSTRAP_BODY).await;
    let (fetch_tx, fetch_rx) = mpsc::channel(4);
    let (cmd_tx, cmd_rx) = mpsc::channel(4);
    let (ui_tx, mut ui_rx) = mpsc::channel(8);
    let state = AppState::new(Arc::new(client_for(&url)), fetch_tx);

    let handle = tokio::spawn(app::run(cmd_rx, fetch_rx, ui_tx, state));
    cmd_tx.send(UserCommand::LoadPlayers).await.unwrap();

    assert!(matches!(ui_rx.recv().await.unwrap(), UiUpdate::LoadStarted));
    let showcase = match ui_rx.recv().await.unwrap() {
        UiUpdate::Loaded(showcase) => showcase,
        other => panic!("expected Loaded, got {other:?}"),
    };

    let defenders: Vec<&str> = showcase
        .rows[1]
        .players
        .iter()
        .map(|p| p.web_name.as_str())
        .collect();
    assert_eq!(defenders, vec!["Alexander-Arnold", "Gabriel"]);
    assert_eq!(showcase.max_magnificence, Some(30));

    let top: Vec<&str> = showcase
        .starters()
        .filter(|p| showcase.is_top_performer(p))
        .map(|p| p.web_name.as_str())
        .collect();
    assert_eq!(top, vec!["Salah", "Haaland"]);
    assert_eq!(showcase.team_name(&showcase.rows[3].players[0]), "Man City");

    cmd_tx.send(UserCommand::Quit).await.unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn app_loop_reports_fetch_failure_without_installing_data() {
    let (url, _server) = serve_once("500 Internal Server Error", "").await;
    let (fetch_tx, fetch_rx) = mpsc::channel(4);
    let (cmd_tx, cmd_rx) = mpsc::channel(4);
    let (ui_tx, mut ui_rx) = mpsc::channel(8);
    let state = AppState::new(Arc::new(client_for(&url)), fetch_tx);

    let handle = tokio::spawn(app::run(cmd_rx, fetch_rx, ui_tx, state));
    cmd_tx.send(UserCommand::LoadPlayers).await.unwrap();

    assert!(matches!(ui_rx.recv().await.unwrap(), UiUpdate::LoadStarted));
    match ui_rx.recv().await.unwrap() {
        UiUpdate::LoadFailed(message) => assert!(message.contains("500"), "{message}"),
        other => panic!("expected LoadFailed, got {other:?}"),
    }

    drop(cmd_tx);
    handle.await.unwrap().unwrap();
}
