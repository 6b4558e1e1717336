mod first_player_mode;
mod terminal_config;

pub use first_player_mode::FirstPlayerMode;
pub use terminal_config::{TerminalConfig, get_config_manager, get_config_path};
