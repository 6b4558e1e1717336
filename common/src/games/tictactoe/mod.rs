mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{best_move, preference, score};
pub use error::TicTacToeError;
pub use game_state::GameState;
pub use types::{BOARD_SIZE, CELL_COUNT, Mark, Outcome, Position, Side, WIN_LINES};
pub use win_detector::{has_won, outcome, winning_line};
