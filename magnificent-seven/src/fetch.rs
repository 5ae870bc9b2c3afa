// Data ingestion: one GET to the bootstrap endpoint, parsed into players and teams.
//
// The payload is installed unmodified; no schema checks beyond the fields
// `Player` and `Team` deserialize.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::SourceConfig;
use crate::squad::player::Player;
use crate::squad::team::Team;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed player payload: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// The two collections the app uses from the bootstrap payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bootstrap {
    #[serde(rename = "elements")]
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
}

/// Parse a bootstrap response body.
pub fn parse_bootstrap(body: &str) -> Result<Bootstrap, FetchError> {
    Ok(serde_json::from_str(body)?)
}

// ---------------------------------------------------------------------------
// PlayerSource
// ---------------------------------------------------------------------------

/// Anything that can produce the player and team collections.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    async fn fetch_players_and_teams(&self) -> Result<Bootstrap, FetchError>;

    /// Human-readable location of the data, for logs and the status bar.
    fn endpoint(&self) -> &str;
}

/// HTTP-backed [`PlayerSource`] for the FPL API (or a proxy in front of it).
pub struct FplClient {
    http: reqwest::Client,
    url: String,
}

impl FplClient {
    /// Build a client with the configured timeout and user agent.
    pub fn from_config(source: &SourceConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(source.timeout_secs))
            .user_agent(source.user_agent.clone())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http,
            url: source.url.clone(),
        })
    }
}

#[async_trait]
impl PlayerSource for FplClient {
    async fn fetch_players_and_teams(&self) -> Result<Bootstrap, FetchError> {
        debug!(url = %self.url, "requesting bootstrap payload");

        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Network {
            url: self.url.clone(),
            source,
        })?;

        let bootstrap = parse_bootstrap(&body)?;
        info!(
            players = bootstrap.players.len(),
            teams = bootstrap.teams.len(),
            "bootstrap payload parsed"
        );
        Ok(bootstrap)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
