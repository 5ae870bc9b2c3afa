// Team records and display-name lookup.

use serde::Deserialize;

/// Label shown when a player's `team_code` has no matching team.
pub const UNKNOWN_TEAM_LABEL: &str = "Unknown Team";

/// A single record from the `teams` collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub code: u32,
    pub name: String,
}

/// Resolve a team code to its display name.
pub fn team_name(teams: &[Team], team_code: u32) -> &str {
    teams
        .iter()
        .find(|t| t.code == team_code)
        .map(|t| t.name.as_str())
        .unwrap_or(UNKNOWN_TEAM_LABEL)
}
