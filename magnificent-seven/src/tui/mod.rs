// TUI: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the app's load state and showcase.
// The app orchestrator pushes `UiUpdate` messages over an mpsc channel; the
// TUI applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::protocol::{LoadStatus, UiUpdate, UserCommand};
use crate::selection::Showcase;
use crate::squad::player::Player;

use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
pub struct ViewState {
    pub status: LoadStatus,
    /// Selection from the most recent successful fetch.
    pub showcase: Option<Arc<Showcase>>,
    /// Error text from the most recent failed fetch, cleared on the next load.
    pub last_error: Option<String>,
    /// Codes of cards currently showing their back face.
    pub flipped: HashSet<u32>,
    /// Index of the focused card in formation order.
    pub selected: usize,
    pub show_info: bool,
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            status: LoadStatus::Idle,
            showcase: None,
            last_error: None,
            flipped: HashSet::new(),
            selected: 0,
            show_info: false,
            confirm_quit: false,
        }
    }
}

impl ViewState {
    /// The currently focused starter, if a showcase is loaded.
    pub fn selected_player(&self) -> Option<&Player> {
        self.showcase.as_ref()?.starter(self.selected)
    }

    /// Whether the card for `code` is showing its back face.
    pub fn is_flipped(&self, code: u32) -> bool {
        self.flipped.contains(&code)
    }

    /// Flip the focused card.
    pub fn toggle_selected_card(&mut self) {
        let Some(code) = self.selected_player().map(|p| p.code) else {
            return;
        };
        if !self.flipped.remove(&code) {
            self.flipped.insert(code);
        }
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::LoadStarted => {
            state.status = LoadStatus::Loading;
            state.last_error = None;
        }
        UiUpdate::Loaded(showcase) => {
            // A new showcase replaces the old one wholesale; stale flips and
            // cursor positions would point at different players.
            state.flipped.clear();
            state.selected = 0;
            state.showcase = Some(showcase);
            state.status = LoadStatus::Loaded;
        }
        UiUpdate::LoadFailed(message) => {
            state.status = if state.showcase.is_some() {
                LoadStatus::Loaded
            } else {
                LoadStatus::Idle
            };
            state.last_error = Some(message);
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    match state.showcase.as_deref() {
        Some(showcase) => widgets::pitch::render(frame, layout.main, showcase, state),
        None => widgets::welcome::render(frame, layout.main, state),
    }
    render_help_bar(frame, &layout, state);

    if state.show_info {
        widgets::info_popup::render(frame, frame.area());
    }
    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(state),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

/// Key hints for the current screen.
fn help_text(state: &ViewState) -> &'static str {
    match state.status {
        LoadStatus::Idle => " Enter:Load players | i:Info | q:Quit",
        LoadStatus::Loading if state.showcase.is_some() => {
            " Reloading... | ←→↑↓:Move | Space:Flip card | i:Info | q:Quit"
        }
        LoadStatus::Loading => " Loading... | i:Info | q:Quit",
        LoadStatus::Loaded => " ←→↑↓:Move | Space:Flip card | r:Reload | i:Info | q:Quit",
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // Channel closed: app is shutting down
                    None => break,
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
