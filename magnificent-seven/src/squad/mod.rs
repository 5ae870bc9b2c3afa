// Squad model: players, teams, and FPL position codes.

pub mod player;
pub mod team;
