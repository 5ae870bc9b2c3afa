// Player card widget.
//
// Front: name, position, team, magnificence.
// Back: goals and assists.
// Top performers get a gold border, and a gold back face.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::squad::player::{position_label, Player};

pub const GOLD: Color = Color::Rgb(212, 175, 55);
const ORANGE: Color = Color::Rgb(234, 88, 12);

/// Everything needed to draw one card.
#[derive(Debug, Clone, Copy)]
pub struct CardProps<'a> {
    pub player: &'a Player,
    pub team_name: &'a str,
    pub top_performer: bool,
    pub flipped: bool,
    pub selected: bool,
}

pub fn render(frame: &mut Frame, area: Rect, props: CardProps<'_>) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(if props.selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style(props.top_performer, props.selected))
        .title(card_title(props.player, props.top_performer))
        .title_alignment(Alignment::Center);

    if props.flipped {
        block = block.style(back_face_style(props.top_performer));
    }

    let paragraph = Paragraph::new(card_lines(props))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Uppercase web name, starred for top performers.
pub fn card_title(player: &Player, top_performer: bool) -> Span<'static> {
    let name = player.web_name.to_uppercase();
    if top_performer {
        Span::styled(
            format!(" ★ {name} ★ "),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(" {name} "),
            Style::default().add_modifier(Modifier::BOLD),
        )
    }
}

pub fn border_style(top_performer: bool, selected: bool) -> Style {
    let style = if top_performer {
        Style::default().fg(GOLD)
    } else if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    if selected {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn back_face_style(top_performer: bool) -> Style {
    if top_performer {
        Style::default().fg(Color::Black).bg(GOLD)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}

/// Body lines for whichever face is showing.
pub fn card_lines(props: CardProps<'_>) -> Vec<Line<'static>> {
    let p = props.player;
    if props.flipped {
        return vec![
            Line::from(""),
            Line::from(format!("Goals: {}", p.goals_scored)),
            Line::from(format!("Assists: {}", p.assists)),
        ];
    }

    vec![
        Line::from(Span::styled(
            position_label(p.element_type),
            Style::default().fg(Color::LightBlue).bg(Color::Blue),
        )),
        Line::from(Span::raw(props.team_name.to_string())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Magnificence: {}", p.magnificence()),
            Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
        )),
    ]
}
