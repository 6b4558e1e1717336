use tictactoe_common::tictactoe::{BOARD_SIZE, Board, Mark, Outcome, Side, winning_line};

use crate::match_session::{COMPUTER_SIDE, HUMAN_SIDE};

/// Empty cells show their 1-based number so the human can type it.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            let cells: Vec<String> = (0..BOARD_SIZE)
                .map(|col| {
                    let index = row * BOARD_SIZE + col;
                    match board.get(index) {
                        Some(Mark::Empty) | None => format!(" {} ", index + 1),
                        Some(mark) => format!(" {} ", mark),
                    }
                })
                .collect();
            cells.join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn turn_text(side: Side) -> String {
    if side == HUMAN_SIDE {
        format!("Your turn ({})", HUMAN_SIDE.mark())
    } else {
        format!("Computer ({}) is thinking...", COMPUTER_SIDE.mark())
    }
}

pub fn outcome_text(board: &Board, outcome: Outcome) -> String {
    let line = winning_line(board)
        .map(|(_, cells)| {
            let cells: Vec<String> = cells.iter().map(|index| (index + 1).to_string()).collect();
            format!(" (line {})", cells.join("-"))
        })
        .unwrap_or_default();

    match outcome.winner() {
        Some(side) if side == HUMAN_SIDE => format!("You win!{}", line),
        Some(_) => format!("Computer wins!{}", line),
        None if outcome == Outcome::Draw => "Draw!".to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_render_empty_board() {
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_render_marks() {
        let board = Board::from_marks([X, E, E, E, O, E, E, E, X]);
        let expected = " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | X ";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_turn_text() {
        assert_eq!(turn_text(HUMAN_SIDE), "Your turn (X)");
        assert_eq!(turn_text(COMPUTER_SIDE), "Computer (O) is thinking...");
    }

    #[test]
    fn test_outcome_text() {
        let board = Board::from_marks([O, O, O, X, X, E, X, E, E]);
        assert_eq!(outcome_text(&board, Outcome::SeekerWins), "Computer wins! (line 1-2-3)");

        let board = Board::from_marks([X, O, E, X, O, E, X, E, E]);
        assert_eq!(outcome_text(&board, Outcome::OpponentWins), "You win! (line 1-4-7)");

        let board = Board::from_marks([X, O, X, X, O, O, O, X, X]);
        assert_eq!(outcome_text(&board, Outcome::Draw), "Draw!");
        assert_eq!(outcome_text(&Board::new(), Outcome::Ongoing), "");
    }
}
