use super::board::Board;
use super::error::TicTacToeError;
use super::types::{Mark, Outcome, Side};
use super::win_detector::outcome;

/// Tie-break rank among equally scored moves: center, then corners, then edges.
pub fn preference(index: usize) -> i32 {
    match index {
        4 => 3,
        0 | 2 | 6 | 8 => 2,
        _ => 1,
    }
}

/// Game-theoretic value of `board` from the seeker's point of view:
/// 1 when the seeker wins with best play, -1 when the opponent does, 0 for a draw.
pub fn score(board: &Board, maximizing: bool) -> i32 {
    let mut board = *board;
    minimax(&mut board, maximizing)
}

/// Picks the optimal cell for `side`. Candidates are visited in index order and
/// a later one only wins with a strictly better score, or an equal score and a
/// strictly higher preference.
pub fn best_move(board: &Board, side: Side) -> Result<usize, TicTacToeError> {
    let outcome = outcome(board);
    if outcome.is_terminal() {
        return Err(TicTacToeError::InvalidMoveRequest { outcome });
    }

    let mut board = *board;
    let available_moves: Vec<usize> = board.available_moves().collect();
    let mut best: Option<(usize, i32)> = None;

    for index in available_moves {
        board.set(index, side.mark());
        let seeker_score = minimax(&mut board, side == Side::Opponent);
        board.set(index, Mark::Empty);

        let side_score = match side {
            Side::Seeker => seeker_score,
            Side::Opponent => -seeker_score,
        };

        let is_better = match best {
            None => true,
            Some((best_index, best_score)) => {
                side_score > best_score
                    || (side_score == best_score && preference(index) > preference(best_index))
            }
        };

        if is_better {
            best = Some((index, side_score));
        }
    }

    best.map(|(index, _)| index)
        .ok_or(TicTacToeError::InvalidMoveRequest { outcome })
}

fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    match outcome(board) {
        Outcome::SeekerWins => return 1,
        Outcome::OpponentWins => return -1,
        Outcome::Draw => return 0,
        Outcome::Ongoing => {}
    }

    let moves: Vec<usize> = board.available_moves().collect();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.set(index, Mark::O);
            let eval = minimax(board, false);
            board.set(index, Mark::Empty);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board.set(index, Mark::X);
            let eval = minimax(board, true);
            board.set(index, Mark::Empty);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
