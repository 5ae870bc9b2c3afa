// Player records and position codes as served by the FPL bootstrap endpoint.

use serde::Deserialize;
use std::fmt;

// ---------------------------------------------------------------------------
// FPL element_type constants
// ---------------------------------------------------------------------------

pub const ELEMENT_TYPE_GKP: u8 = 1;
pub const ELEMENT_TYPE_DEF: u8 = 2;
pub const ELEMENT_TYPE_MID: u8 = 3;
pub const ELEMENT_TYPE_FWD: u8 = 4;

/// Label shown for an `element_type` outside the four known positions.
pub const UNKNOWN_POSITION_LABEL: &str = "Unknown";

/// Football positions, one per FPL `element_type` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions in formation order (back to front).
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Map an FPL `element_type` code to a position.
    ///
    /// Returns `None` for anything other than 1..=4 (the API has carried
    /// other codes, e.g. managers, in some seasons).
    pub fn from_element_type(code: u8) -> Option<Self> {
        match code {
            ELEMENT_TYPE_GKP => Some(Position::Goalkeeper),
            ELEMENT_TYPE_DEF => Some(Position::Defender),
            ELEMENT_TYPE_MID => Some(Position::Midfielder),
            ELEMENT_TYPE_FWD => Some(Position::Forward),
            _ => None,
        }
    }

    /// The FPL `element_type` code for this position.
    pub fn element_type(&self) -> u8 {
        match self {
            Position::Goalkeeper => ELEMENT_TYPE_GKP,
            Position::Defender => ELEMENT_TYPE_DEF,
            Position::Midfielder => ELEMENT_TYPE_MID,
            Position::Forward => ELEMENT_TYPE_FWD,
        }
    }

    /// Full display label, as printed on a card.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }

    /// Three-letter abbreviation used for row labels.
    pub fn short_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GKP",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }

    /// Number of starters shown for this position (1-2-3-1 formation).
    pub fn capacity(&self) -> usize {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Display label for a raw `element_type`, falling back to "Unknown".
pub fn position_label(element_type: u8) -> &'static str {
    Position::from_element_type(element_type)
        .map(|p| p.display_str())
        .unwrap_or(UNKNOWN_POSITION_LABEL)
}

/// A single player record from the `elements` collection.
///
/// Field names match the raw JSON so the record deserializes verbatim;
/// every other field in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Player {
    /// Stable unique identifier, also used as the card key.
    pub code: u32,
    /// Short display name (e.g. "Salah").
    pub web_name: String,
    pub goals_scored: u32,
    pub assists: u32,
    /// Raw position code; see [`Position::from_element_type`].
    pub element_type: u8,
    /// Foreign key into the teams collection.
    pub team_code: u32,
}

impl Player {
    /// Goals plus assists. Derived on demand, never stored.
    pub fn magnificence(&self) -> u32 {
        self.goals_scored.saturating_add(self.assists)
    }

    /// The player's position, if the `element_type` is a known one.
    pub fn position(&self) -> Option<Position> {
        Position::from_element_type(self.element_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(goals: u32, assists: u32, element_type: u8) -> Player {
        Player {
            code: 1,
            web_name: "Test".into(),
            goals_scored: goals,
            assists,
            element_type,
            team_code: 3,
        }
    }

    #[test]
    fn from_element_type_known_codes() {
        assert_eq!(Position::from_element_type(1), Some(Position::Goalkeeper));
        assert_eq!(Position::from_element_type(2), Some(Position::Defender));
        assert_eq!(Position::from_element_type(3), Some(Position::Midfielder));
        assert_eq!(Position::from_element_type(4), Some(Position::Forward));
    }

    #[test]
    fn from_element_type_unknown_codes() {
        assert_eq!(Position::from_element_type(0), None);
        assert_eq!(Position::from_element_type(5), None);
        assert_eq!(Position::from_element_type(255), None);
    }

    #[test]
    fn element_type_round_trips_for_all_positions() {
        for pos in Position::ALL {
            assert_eq!(Position::from_element_type(pos.element_type()), Some(pos));
        }
    }

    #[test]
    fn capacities_form_one_two_three_one() {
        let caps: Vec<usize> = Position::ALL.iter().map(|p| p.capacity()).collect();
        assert_eq!(caps, vec![1, 2, 3, 1]);
    }

    #[test]
    fn position_label_falls_back_to_unknown() {
        assert_eq!(position_label(3), "Midfielder");
        assert_eq!(position_label(9), "Unknown");
    }

    #[test]
    fn display_matches_display_str() {
        assert_eq!(Position::Forward.to_string(), "Forward");
        assert_eq!(Position::Defender.short_str(), "DEF");
    }

    #[test]
    fn magnificence_is_goals_plus_assists() {
        assert_eq!(player(5, 2, 3).magnificence(), 7);
        assert_eq!(player(0, 0, 1).magnificence(), 0);
    }

    #[test]
    fn magnificence_saturates_instead_of_overflowing() {
        assert_eq!(player(u32::MAX, 1, 4).magnificence(), u32::MAX);
    }

    #[test]
    fn deserializes_raw_element_ignoring_extra_fields() {
        let json = r#"{
            "code": 118748,
            "web_name": "Salah",
            "goals_scored": 18,
            "assists": 12,
            "element_type": 3,
            "team_code": 14,
            "now_cost": 130,
            "status": "a"
        }"#;
        let p: Player = serde_json::from_str(json).unwrap();
        assert_eq!(p.code, 118748);
        assert_eq!(p.web_name, "Salah");
        assert_eq!(p.magnificence(), 30);
        assert_eq!(p.position(), Some(Position::Midfielder));
    }
}
