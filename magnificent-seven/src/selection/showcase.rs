// Cached selection result for one successful fetch.
//
// Built once when a fetch resolves and then shared read-only with the TUI, so
// nothing is re-filtered or re-sorted per frame.

use chrono::{DateTime, Utc};

use crate::squad::player::{Player, Position};
use crate::squad::team::{team_name, Team};

use super::highlight::{self, max_magnificence};
use super::ranking::{select_by_position, FORMATION};

/// One formation row: a position and its ranked starters.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseRow {
    pub position: Position,
    pub players: Vec<Player>,
}

/// The derived view of a fetched player/team collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    /// Rows in formation order: GKP, DEF, MID, FWD.
    pub rows: Vec<ShowcaseRow>,
    /// Maximum magnificence over every fetched player. `None` when the
    /// fetch returned no players, in which case nothing is highlighted.
    pub max_magnificence: Option<u32>,
    /// Teams kept for display-name lookup.
    pub teams: Vec<Team>,
    /// Size of the full collection the selection was drawn from.
    pub total_players: usize,
    pub fetched_at: DateTime<Utc>,
}

impl Showcase {
    /// Run every bucket selection and the global maximum over `players`.
    pub fn build(players: &[Player], teams: Vec<Team>, fetched_at: DateTime<Utc>) -> Self {
        let rows = FORMATION
            .iter()
            .filter_map(|&(element_type, limit)| {
                Position::from_element_type(element_type).map(|position| ShowcaseRow {
                    position,
                    players: select_by_position(players, element_type, limit),
                })
            })
            .collect();

        Showcase {
            rows,
            max_magnificence: max_magnificence(players).ok(),
            teams,
            total_players: players.len(),
            fetched_at,
        }
    }

    /// Whether `player` is tied for the global maximum.
    pub fn is_top_performer(&self, player: &Player) -> bool {
        self.max_magnificence
            .is_some_and(|max| highlight::is_top_performer(player, max))
    }

    /// Starters for a single position (empty if none were fetched).
    pub fn row(&self, position: Position) -> &[Player] {
        self.rows
            .iter()
            .find(|r| r.position == position)
            .map(|r| r.players.as_slice())
            .unwrap_or(&[])
    }

    /// Every selected player in formation order.
    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.rows.iter().flat_map(|r| r.players.iter())
    }

    /// Number of selected players across all rows.
    pub fn starter_count(&self) -> usize {
        self.rows.iter().map(|r| r.players.len()).sum()
    }

    /// The `index`-th starter in formation order.
    pub fn starter(&self, index: usize) -> Option<&Player> {
        self.starters().nth(index)
    }

    /// Display name of the player's team.
    pub fn team_name(&self, player: &Player) -> &str {
        team_name(&self.teams, player.team_code)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
