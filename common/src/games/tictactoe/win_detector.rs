use super::board::Board;
use super::types::{Outcome, Side, WIN_LINES};

pub fn has_won(board: &Board, side: Side) -> bool {
    let mark = side.mark();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
}

/// Seeker is checked first; legal play never completes lines for both sides.
pub fn outcome(board: &Board) -> Outcome {
    if has_won(board, Side::Seeker) {
        Outcome::SeekerWins
    } else if has_won(board, Side::Opponent) {
        Outcome::OpponentWins
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

pub fn winning_line(board: &Board) -> Option<(Side, [usize; 3])> {
    WIN_LINES.iter().find_map(|&line| {
        let side = board.get(line[0])?.side()?;
        line.iter()
            .all(|&index| board.get(index) == Some(side.mark()))
            .then_some((side, line))
    })
}
