// Application state and orchestration logic.
//
// Receives commands from the TUI, runs at most one fetch at a time, builds the
// showcase once per successful fetch, and pushes UI updates back to the TUI.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::fetch::{Bootstrap, PlayerSource};
use crate::protocol::{FetchEvent, LoadStatus, UiUpdate, UserCommand};
use crate::selection::Showcase;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub source: Arc<dyn PlayerSource>,
    pub status: LoadStatus,
    /// Most recent successful selection. Replaced wholesale on each fetch.
    pub showcase: Option<Arc<Showcase>>,
    pub fetch_task: Option<JoinHandle<()>>,
    /// Sender cloned into each fetch task to report its outcome.
    pub fetch_tx: mpsc::Sender<FetchEvent>,
}

impl AppState {
    pub fn new(source: Arc<dyn PlayerSource>, fetch_tx: mpsc::Sender<FetchEvent>) -> Self {
        AppState {
            source,
            status: LoadStatus::Idle,
            showcase: None,
            fetch_task: None,
            fetch_tx,
        }
    }

    /// Spawn a fetch unless one is already in flight.
    ///
    /// Returns `true` if a new fetch was started.
    pub fn start_fetch(&mut self) -> bool {
        if self.status == LoadStatus::Loading {
            debug!("load requested while a fetch is in flight; ignoring");
            return false;
        }

        info!("Fetching players and teams from {}", self.source.endpoint());
        self.status = LoadStatus::Loading;

        let source = Arc::clone(&self.source);
        let tx = self.fetch_tx.clone();
        self.fetch_task = Some(tokio::spawn(async move {
            let event = match source.fetch_players_and_teams().await {
                Ok(bootstrap) => FetchEvent::Completed(bootstrap),
                Err(e) => FetchEvent::Failed(e.to_string()),
            };
            let _ = tx.send(event).await;
        }));
        true
    }

    /// Build and install a showcase from a fetched payload.
    pub fn install(&mut self, bootstrap: Bootstrap) -> Arc<Showcase> {
        let showcase = Arc::new(Showcase::build(
            &bootstrap.players,
            bootstrap.teams,
            Utc::now(),
        ));
        match showcase.max_magnificence {
            Some(max) => info!(
                "Selected {} starters from {} players (max magnificence {})",
                showcase.starter_count(),
                showcase.total_players,
                max
            ),
            None => warn!("Fetch returned no players; nothing to highlight"),
        }
        self.showcase = Some(Arc::clone(&showcase));
        self.status = LoadStatus::Loaded;
        self.fetch_task = None;
        showcase
    }

    /// Return to the pre-load state after a failed fetch.
    ///
    /// A previously installed showcase is kept; no partial data is installed.
    pub fn fail(&mut self, message: &str) {
        warn!("There was an issue with the fetch: {}", message);
        self.status = if self.showcase.is_some() {
            LoadStatus::Loaded
        } else {
            LoadStatus::Idle
        };
        self.fetch_task = None;
    }

    /// Abort any in-flight fetch.
    pub fn cancel_fetch(&mut self) {
        if let Some(handle) = self.fetch_task.take() {
            handle.abort();
        }
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the main application event loop.
///
/// Listens on two channels using `tokio::select!`:
/// 1. User commands from the TUI
/// 2. Fetch outcomes from spawned fetch tasks
///
/// Pushes UI updates through `ui_tx` for the TUI render loop.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    mut fetch_rx: mpsc::Receiver<FetchEvent>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            // AppState holds a sender, so this channel never closes while
            // the loop is running.
            Some(event) = fetch_rx.recv() => {
                handle_fetch_event(&mut state, event, &ui_tx).await;
            }
        }
    }

    state.cancel_fetch();
    info!("Application event loop exiting");
    Ok(())
}

/// Handle a user command from the TUI.
async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match cmd {
        UserCommand::LoadPlayers => {
            if state.start_fetch() {
                let _ = ui_tx.send(UiUpdate::LoadStarted).await;
            }
        }
        UserCommand::Quit => {
            // Handled in the main loop
        }
    }
}

/// Handle the outcome of a fetch task.
async fn handle_fetch_event(
    state: &mut AppState,
    event: FetchEvent,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match event {
        FetchEvent::Completed(bootstrap) => {
            let showcase = state.install(bootstrap);
            let _ = ui_tx.send(UiUpdate::Loaded(showcase)).await;
        }
        FetchEvent::Failed(message) => {
            state.fail(&message);
            let _ = ui_tx.send(UiUpdate::LoadFailed(message)).await;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
