// Formation pitch: one row of player cards per position (GKP, DEF, MID, FWD).

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::selection::Showcase;
use crate::tui::widgets::player_card::{self, CardProps};
use crate::tui::ViewState;

const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 7;
const LABEL_WIDTH: u16 = 5;

pub fn render(frame: &mut Frame, area: Rect, showcase: &Showcase, state: &ViewState) {
    let row_areas = Layout::vertical(vec![Constraint::Fill(1); showcase.rows.len()]).split(area);

    let mut index = 0;
    for (row, row_area) in showcase.rows.iter().zip(row_areas.iter()) {
        let [label_area, cards_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Fill(1)])
                .areas(*row_area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                row.position.short_str(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )),
            vertically_centered(label_area, 1),
        );

        if row.players.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("No {} fetched", row.position.display_str().to_lowercase()),
                    Style::default().fg(Color::DarkGray),
                ))),
                vertically_centered(cards_area, 1),
            );
            continue;
        }

        let card_area = vertically_centered(cards_area, CARD_HEIGHT);
        let slots = Layout::horizontal(vec![Constraint::Length(CARD_WIDTH); row.players.len()])
            .flex(Flex::SpaceAround)
            .split(card_area);

        for (player, slot) in row.players.iter().zip(slots.iter()) {
            let props = CardProps {
                player,
                team_name: showcase.team_name(player),
                top_performer: showcase.is_top_performer(player),
                flipped: state.is_flipped(player.code),
                selected: index == state.selected,
            };
            player_card::render(frame, *slot, props);
            index += 1;
        }
    }
}

/// A full-width strip of `height` rows centered vertically in `area`.
fn vertically_centered(area: Rect, height: u16) -> Rect {
    Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .split(area)[0]
}
