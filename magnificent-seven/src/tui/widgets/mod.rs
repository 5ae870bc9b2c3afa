// TUI widget modules.

pub mod info_popup;
pub mod pitch;
pub mod player_card;
pub mod quit_confirm;
pub mod status_bar;
pub mod welcome;
