// Selection engine: magnificence ranking, per-position buckets, top performers.

pub mod highlight;
pub mod ranking;
pub mod showcase;

pub use highlight::{is_top_performer, max_magnificence, SelectionError};
pub use ranking::{compare_magnificence, rank_by_magnificence, select_by_position, FORMATION};
pub use showcase::Showcase;
