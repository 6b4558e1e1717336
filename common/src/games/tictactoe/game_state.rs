use super::board::Board;
use super::bot_controller::best_move;
use super::error::TicTacToeError;
use super::types::{Outcome, Side};
use super::win_detector::outcome;

/// One game in progress. The host keeps a single instance per game and every
/// mark, human or searched, goes through `place_mark`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub to_move: Side,
    pub outcome: Outcome,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            outcome: Outcome::Ongoing,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, side: Side, index: usize) -> Result<Outcome, TicTacToeError> {
        if self.outcome.is_terminal() {
            return Err(TicTacToeError::GameOver {
                outcome: self.outcome,
            });
        }

        if side != self.to_move {
            return Err(TicTacToeError::NotYourTurn {
                expected: self.to_move,
            });
        }

        self.board.place(index, side)?;
        self.last_move = Some(index);
        self.outcome = outcome(&self.board);

        if self.outcome == Outcome::Ongoing {
            self.to_move = side.opponent();
        }

        Ok(self.outcome)
    }

    /// Searches the optimal cell for `side` and plays it.
    pub fn computer_move(&mut self, side: Side) -> Result<usize, TicTacToeError> {
        if side != self.to_move && !self.outcome.is_terminal() {
            return Err(TicTacToeError::NotYourTurn {
                expected: self.to_move,
            });
        }

        let index = best_move(&self.board, side)?;
        self.place_mark(side, index)?;
        Ok(index)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new(Side::Opponent);
        assert_eq!(state.place_mark(Side::Opponent, 0), Ok(Outcome::Ongoing));
        assert_eq!(state.to_move, Side::Seeker);
        assert_eq!(state.last_move, Some(0));

        let result = state.place_mark(Side::Opponent, 1);
        assert_eq!(
            result,
            Err(TicTacToeError::NotYourTurn {
                expected: Side::Seeker
            })
        );
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut state = GameState::new(Side::Opponent);
        state.place_mark(Side::Opponent, 4).unwrap();

        let result = state.place_mark(Side::Seeker, 4);
        assert_eq!(result, Err(TicTacToeError::IllegalPlacement { index: 4 }));
        assert_eq!(state.to_move, Side::Seeker);
        assert_eq!(state.last_move, Some(4));
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = GameState::new(Side::Opponent);
        for (side, index) in [
            (Side::Opponent, 0),
            (Side::Seeker, 3),
            (Side::Opponent, 1),
            (Side::Seeker, 4),
        ] {
            state.place_mark(side, index).unwrap();
        }

        assert_eq!(state.place_mark(Side::Opponent, 2), Ok(Outcome::OpponentWins));
        assert!(state.is_over());
        assert_eq!(state.to_move, Side::Opponent);

        let result = state.place_mark(Side::Seeker, 5);
        assert_eq!(
            result,
            Err(TicTacToeError::GameOver {
                outcome: Outcome::OpponentWins
            })
        );
        assert_eq!(
            state.computer_move(Side::Seeker),
            Err(TicTacToeError::InvalidMoveRequest {
                outcome: Outcome::OpponentWins
            })
        );
    }

    #[test]
    fn test_computer_move_plays_for_side_to_move() {
        let mut state = GameState::new(Side::Seeker);
        assert_eq!(state.computer_move(Side::Seeker), Ok(4));
        assert_eq!(state.to_move, Side::Opponent);

        let result = state.computer_move(Side::Seeker);
        assert_eq!(
            result,
            Err(TicTacToeError::NotYourTurn {
                expected: Side::Opponent
            })
        );
    }

    #[test]
    fn test_computer_against_computer_draws() {
        let mut state = GameState::new(Side::Opponent);
        while !state.is_over() {
            let side = state.to_move;
            state.computer_move(side).unwrap();
        }
        assert_eq!(state.outcome, Outcome::Draw);
        assert!(state.board.is_full());
    }
}
