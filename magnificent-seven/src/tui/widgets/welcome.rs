// Welcome screen: title and load prompt shown until the first successful fetch.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::protocol::LoadStatus;
use crate::tui::layout::centered_rect;
use crate::tui::ViewState;

const PANEL_WIDTH: u16 = 60;
const PANEL_HEIGHT: u16 = 9;

pub const WELCOME_TITLE: &str = "Welcome to FPL's Magnificent Seven";
pub const LOAD_PROMPT: &str = "Press Enter to reveal the stars of the season so far!";

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);

    let paragraph = Paragraph::new(build_lines(state))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );
    frame.render_widget(paragraph, panel);
}

fn build_lines(state: &ViewState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            WELCOME_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match state.status {
        LoadStatus::Loading => lines.push(Line::from(Span::styled(
            "Fetching players...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::DIM),
        ))),
        _ => lines.push(Line::from(Span::styled(
            format!("[ {LOAD_PROMPT} ]"),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White),
        ))),
    }

    if let Some(err) = &state.last_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("There was an issue with the fetch: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    lines
}
