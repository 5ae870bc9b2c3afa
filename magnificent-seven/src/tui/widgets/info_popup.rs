// Info overlay explaining how players are ranked and shown.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::layout::centered_rect;

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 14;

pub const RULES: [&str; 5] = [
    "Magnificence is determined by calculating combined goals and assists",
    "In the event of a tie, players with more goals are prioritised over assists",
    "The formation is fixed to one goalkeeper, two defenders, three midfielders and one forward",
    "Press Space on a player card to show goal and assist totals",
    "The most magnificent player is highlighted with a gold border and card back",
];

pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(234, 88, 12)))
        .title(Span::styled(
            " How it works ",
            Style::default()
                .fg(Color::Rgb(234, 88, 12))
                .add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line> = RULES
        .iter()
        .map(|rule| Line::from(format!("• {rule}")))
        .collect();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block)
        .style(Style::default().bg(Color::Black));

    frame.render_widget(paragraph, popup_area);
}
