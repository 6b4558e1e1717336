use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tictactoe_common::log;
use tictactoe_common::tictactoe::{GameState, Side};

use crate::config::TerminalConfig;
use crate::input::{Command, parse_command};
use crate::match_session::{COMPUTER_SIDE, HUMAN_SIDE, MatchSession, Scoreboard};
use crate::renderer::{outcome_text, render_board, turn_text};

enum GameEnd {
    Finished,
    Restart,
    Quit,
}

/// Drives games until the human quits or input ends.
pub struct GameLoop<R: BufRead, W: Write> {
    input: R,
    output: W,
    session: MatchSession,
    computer_move_delay: Duration,
    restart_delay: Duration,
}

impl<R: BufRead, W: Write> GameLoop<R, W> {
    pub fn new(input: R, output: W, config: &TerminalConfig, session: MatchSession) -> Self {
        Self {
            input,
            output,
            session,
            computer_move_delay: config.computer_move_delay(),
            restart_delay: config.restart_delay(),
        }
    }

    pub fn run(&mut self) -> io::Result<Scoreboard> {
        writeln!(self.output, "{}", self.session.scoreboard())?;

        loop {
            let first = self.session.next_first_mover();
            let mut game_number = self.session.scoreboard().games_played() + 1;
            log!("Game {} started, {} moves first", game_number, first);

            loop {
                match self.play_game(first)? {
                    GameEnd::Finished => break,
                    GameEnd::Restart => {
                        log!("Game {} restarted", game_number);
                        writeln!(self.output, "Restarting game")?;
                    }
                    GameEnd::Quit => {
                        let scoreboard = self.session.scoreboard();
                        log!("Session ended after {} games", scoreboard.games_played());
                        return Ok(scoreboard);
                    }
                }
            }

            writeln!(self.output, "{}", self.session.scoreboard())?;
            game_number += 1;
            log!("Next game {} starts in {:?}", game_number, self.restart_delay);
            sleep(self.restart_delay);
        }
    }

    fn play_game(&mut self, first: Side) -> io::Result<GameEnd> {
        let mut state = GameState::new(first);
        writeln!(self.output)?;
        writeln!(self.output, "{}", render_board(&state.board))?;

        while !state.is_over() {
            writeln!(self.output, "{}", turn_text(state.to_move))?;

            if state.to_move == COMPUTER_SIDE {
                sleep(self.computer_move_delay);
                let index = state.computer_move(COMPUTER_SIDE).map_err(io::Error::other)?;
                log!("Computer marked cell {}", index);
                writeln!(self.output, "Computer marks cell {}", index + 1)?;
            } else {
                match self.read_command()? {
                    None | Some(Command::Quit) => return Ok(GameEnd::Quit),
                    Some(Command::Restart) => return Ok(GameEnd::Restart),
                    Some(Command::Place(index)) => {
                        if let Err(e) = state.place_mark(HUMAN_SIDE, index) {
                            log!("Rejected human move: {}", e);
                            writeln!(self.output, "Cell {} is not available", index + 1)?;
                            continue;
                        }
                        log!("Human marked cell {}", index);
                    }
                }
            }

            writeln!(self.output, "{}", render_board(&state.board))?;
        }

        log!("Game over: {}", state.outcome);
        writeln!(self.output, "{}", outcome_text(&state.board, state.outcome))?;
        self.session.finish_game(first, state.outcome);
        Ok(GameEnd::Finished)
    }

    /// `None` on end of input. Unparsable lines are reported and re-read.
    fn read_command(&mut self) -> io::Result<Option<Command>> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_command(&line) {
                Ok(command) => return Ok(Some(command)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

fn sleep(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FirstPlayerMode;
    use tictactoe_common::games::SessionRng;

    fn run_script(mode: FirstPlayerMode, script: &str) -> (Scoreboard, String) {
        let config = TerminalConfig {
            first_player: mode,
            computer_move_delay_ms: 0,
            restart_delay_ms: 0,
            log_file: None,
        };
        let session = MatchSession::new(mode, SessionRng::new(3));
        let mut output = Vec::new();
        let scoreboard = GameLoop::new(script.as_bytes(), &mut output, &config, session)
            .run()
            .unwrap();
        (scoreboard, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_quit_immediately() {
        let (scoreboard, output) = run_script(FirstPlayerMode::Human, "q\n");
        assert_eq!(scoreboard, Scoreboard::default());
        assert!(output.contains("Your turn (X)"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (scoreboard, _) = run_script(FirstPlayerMode::Human, "");
        assert_eq!(scoreboard.games_played(), 0);
    }

    #[test]
    fn test_computer_wins_and_opens_next_game() {
        let (scoreboard, output) = run_script(FirstPlayerMode::Alternate, "1\n2\n9\nq\n");

        assert_eq!(scoreboard.computer_wins, 1);
        assert_eq!(scoreboard.games_played(), 1);
        assert!(output.contains("Computer wins! (line 3-5-7)"));
        assert!(output.contains("Player: 0 | Computer: 1 | Draws: 0"));

        let after_game = output.split("Computer wins!").nth(1).unwrap();
        assert!(after_game.contains("Computer marks cell 5"));
    }

    #[test]
    fn test_bad_input_is_reported_and_reprompted() {
        let (_, output) = run_script(FirstPlayerMode::Human, "hello\n5\n5\n12\nq\n");
        assert!(output.contains("'hello' is not a cell number, r or q"));
        assert!(output.contains("Cell 5 is not available"));
        assert!(output.contains("Cell must be between 1 and 9"));
    }

    #[test]
    fn test_restart_keeps_score_and_opener() {
        let (scoreboard, output) = run_script(FirstPlayerMode::Computer, "r\nq\n");
        assert_eq!(scoreboard.games_played(), 0);
        assert!(output.contains("Restarting game"));
        assert_eq!(output.matches("Computer marks cell 5").count(), 2);
    }
}
