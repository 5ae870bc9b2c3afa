// Status bar widget: title, load indicator, fetch summary.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::LoadStatus;
use crate::tui::ViewState;

pub const APP_TITLE: &str = "FPL's Magnificent Seven";

/// Render the status bar into the given area.
///
/// Layout: [load indicator] [title] | [summary or error]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (dot, dot_color) = load_indicator(state.status);
    let mut spans = vec![
        Span::styled(format!(" {} ", dot), Style::default().fg(dot_color)),
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
    ];

    match &state.last_error {
        Some(err) => spans.push(Span::styled(
            format!("Fetch failed: {err}"),
            Style::default().fg(Color::Red),
        )),
        None => spans.push(Span::styled(
            summary_text(state),
            Style::default().fg(Color::White),
        )),
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Return the load dot character and its color.
pub fn load_indicator(status: LoadStatus) -> (&'static str, Color) {
    match status {
        LoadStatus::Idle => ("○", Color::Gray),
        LoadStatus::Loading => ("●", Color::Yellow),
        LoadStatus::Loaded => ("●", Color::Green),
    }
}

/// Short description of what is on screen.
pub fn summary_text(state: &ViewState) -> String {
    match (state.status, state.showcase.as_deref()) {
        (LoadStatus::Loading, _) => "Loading players...".to_string(),
        (_, Some(showcase)) => format!(
            "{} of {} players | fetched {}",
            showcase.starter_count(),
            showcase.total_players,
            showcase.fetched_at.format("%H:%M:%S UTC")
        ),
        (_, None) => "No data loaded".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
