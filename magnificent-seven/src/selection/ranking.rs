// Magnificence ordering and per-position shortlists.
//
// Players are ranked by goals + assists (descending). Ties go to the player
// with more goals; anything still tied keeps its input order.

use std::cmp::Ordering;

use crate::squad::player::{
    Player, ELEMENT_TYPE_DEF, ELEMENT_TYPE_FWD, ELEMENT_TYPE_GKP, ELEMENT_TYPE_MID,
};

/// The fixed buckets as `(element_type, limit)` pairs, back to front.
pub const FORMATION: [(u8, usize); 4] = [
    (ELEMENT_TYPE_GKP, 1),
    (ELEMENT_TYPE_DEF, 2),
    (ELEMENT_TYPE_MID, 3),
    (ELEMENT_TYPE_FWD, 1),
];

/// Ordering used for every ranking decision.
///
/// `Less` means `a` sorts before `b`.
pub fn compare_magnificence(a: &Player, b: &Player) -> Ordering {
    b.magnificence()
        .cmp(&a.magnificence())
        .then_with(|| b.goals_scored.cmp(&a.goals_scored))
}

/// Return the players ordered by [`compare_magnificence`].
///
/// The sort is stable and the input slice is left untouched.
pub fn rank_by_magnificence(players: &[Player]) -> Vec<Player> {
    let mut ranked = players.to_vec();
    ranked.sort_by(compare_magnificence);
    ranked
}

/// Best `limit` players whose `element_type` equals the given code.
pub fn select_by_position(players: &[Player], element_type: u8, limit: usize) -> Vec<Player> {
    let candidates: Vec<Player> = players
        .iter()
        .filter(|p| p.element_type == element_type)
        .cloned()
        .collect();
    let mut bucket = rank_by_magnificence(&candidates);
    bucket.truncate(limit);
    bucket
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
