use super::types::{Outcome, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    /// Move search was asked for a move on a finished board.
    InvalidMoveRequest { outcome: Outcome },
    IllegalPlacement { index: usize },
    OutOfBounds { index: usize },
    NotYourTurn { expected: Side },
    GameOver { outcome: Outcome },
}

impl std::fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicTacToeError::InvalidMoveRequest { outcome } => {
                write!(f, "No move can be searched, game is already over ({})", outcome)
            }
            TicTacToeError::IllegalPlacement { index } => {
                write!(f, "Cell {} is already marked", index)
            }
            TicTacToeError::OutOfBounds { index } => {
                write!(f, "Cell {} is out of bounds", index)
            }
            TicTacToeError::NotYourTurn { expected } => {
                write!(f, "Not your turn, {} is to move", expected)
            }
            TicTacToeError::GameOver { outcome } => {
                write!(f, "Game is already over ({})", outcome)
            }
        }
    }
}

impl std::error::Error for TicTacToeError {}
