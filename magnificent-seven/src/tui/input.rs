// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (card focus, flips,
// overlays).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::protocol::{LoadStatus, UserCommand};
use crate::selection::Showcase;
use super::ViewState;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator. Returns `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // crossterm emits both Press and Release on some platforms.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    if view_state.show_info {
        return handle_info_open(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Char('i') => {
            view_state.show_info = true;
            None
        }
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }
        _ => match view_state.status {
            LoadStatus::Idle => handle_welcome(key_event),
            // The load control is disabled while a request is in flight;
            // cards already on the pitch stay interactive.
            LoadStatus::Loading => match key_event.code {
                KeyCode::Char('r') => None,
                _ if view_state.showcase.is_some() => handle_pitch(key_event, view_state),
                _ => None,
            },
            LoadStatus::Loaded => handle_pitch(key_event, view_state),
        },
    }
}

/// In quit confirmation mode, `y`/`q` confirm, `n`/`Esc` cancel, everything
/// else is blocked.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// While the info popup is open, `i`/`Esc` close it and other keys are ignored.
fn handle_info_open(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    if matches!(key_event.code, KeyCode::Char('i') | KeyCode::Esc) {
        view_state.show_info = false;
    }
    None
}

fn handle_welcome(key_event: KeyEvent) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') => Some(UserCommand::LoadPlayers),
        _ => None,
    }
}

fn handle_pitch(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('r') => Some(UserCommand::LoadPlayers),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('f') => {
            view_state.toggle_selected_card();
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            move_horizontal(view_state, -1);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            move_horizontal(view_state, 1);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            move_vertical(view_state, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_vertical(view_state, 1);
            None
        }
        _ => None,
    }
}

/// Step the focus through the starters in formation order, clamped at both ends.
fn move_horizontal(view_state: &mut ViewState, delta: isize) {
    let Some(count) = view_state.showcase.as_ref().map(|s| s.starter_count()) else {
        return;
    };
    if count == 0 {
        return;
    }
    view_state.selected = view_state
        .selected
        .saturating_add_signed(delta)
        .min(count - 1);
}

/// Move the focus to the nearest non-empty row above or below, keeping the
/// column where possible.
fn move_vertical(view_state: &mut ViewState, delta: isize) {
    let Some(showcase) = view_state.showcase.as_deref() else {
        return;
    };
    let Some((row, col)) = row_col(showcase, view_state.selected) else {
        return;
    };

    let mut target = row as isize + delta;
    while target >= 0 && (target as usize) < showcase.rows.len() {
        let len = showcase.rows[target as usize].players.len();
        if len > 0 {
            let new_col = col.min(len - 1);
            if let Some(index) = flat_index(showcase, target as usize, new_col) {
                view_state.selected = index;
            }
            return;
        }
        target += delta;
    }
}

/// Convert a flat starter index to `(row, column)`.
fn row_col(showcase: &Showcase, index: usize) -> Option<(usize, usize)> {
    let mut remaining = index;
    for (row, r) in showcase.rows.iter().enumerate() {
        if remaining < r.players.len() {
            return Some((row, remaining));
        }
        remaining -= r.players.len();
    }
    None
}

/// Convert `(row, column)` back to a flat starter index.
fn flat_index(showcase: &Showcase, row: usize, col: usize) -> Option<usize> {
    let r = showcase.rows.get(row)?;
    if col >= r.players.len() {
        return None;
    }
    let before: usize = showcase.rows[..row].iter().map(|r| r.players.len()).sum();
    Some(before + col)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
