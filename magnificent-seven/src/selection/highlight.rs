// Global maximum magnificence and the top-performer predicate.

use thiserror::Error;

use crate::squad::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("cannot compute a maximum over an empty player collection")]
    EmptyCollection,
}

/// Highest magnificence across the whole, unfiltered collection.
///
/// Empty input has no maximum and yields [`SelectionError::EmptyCollection`].
pub fn max_magnificence(players: &[Player]) -> Result<u32, SelectionError> {
    players
        .iter()
        .map(Player::magnificence)
        .max()
        .ok_or(SelectionError::EmptyCollection)
}

/// Whether the player's magnificence equals the given maximum.
///
/// Every player tied at the maximum qualifies.
pub fn is_top_performer(player: &Player, max_magnificence: u32) -> bool {
    player.magnificence() == max_magnificence
}
