// Message types passed between the TUI, the app orchestrator, and fetch tasks.

use std::sync::Arc;

use crate::fetch::Bootstrap;
use crate::selection::Showcase;

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Fetch players and teams (initial load or refresh).
    LoadPlayers,
    Quit,
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// A fetch has been started.
    LoadStarted,
    /// A fetch succeeded; the new showcase replaces any previous one.
    Loaded(Arc<Showcase>),
    /// A fetch failed. Carries the error text for display.
    LoadFailed(String),
}

/// Result of a spawned fetch task, sent back to the orchestrator.
#[derive(Debug)]
pub enum FetchEvent {
    Completed(Bootstrap),
    Failed(String),
}

/// Session load state shared by the app and the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing fetched yet (or the first fetch failed).
    Idle,
    /// A request is in flight; further load requests are ignored.
    Loading,
    /// A showcase is installed.
    Loaded,
}
