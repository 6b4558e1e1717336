use std::fmt;
use tictactoe_common::games::SessionRng;
use tictactoe_common::tictactoe::{Outcome, Side};

use crate::config::FirstPlayerMode;

pub const HUMAN_SIDE: Side = Side::Opponent;
pub const COMPUTER_SIDE: Side = Side::Seeker;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::OpponentWins => self.human_wins += 1,
            Outcome::SeekerWins => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player: {} | Computer: {} | Draws: {}",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}

/// Cumulative state across the games of one sitting.
pub struct MatchSession {
    mode: FirstPlayerMode,
    rng: SessionRng,
    alternate_next: Side,
    scoreboard: Scoreboard,
}

impl MatchSession {
    pub fn new(mode: FirstPlayerMode, rng: SessionRng) -> Self {
        Self {
            mode,
            rng,
            alternate_next: HUMAN_SIDE,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn next_first_mover(&mut self) -> Side {
        match self.mode {
            FirstPlayerMode::Human => HUMAN_SIDE,
            FirstPlayerMode::Computer => COMPUTER_SIDE,
            FirstPlayerMode::Alternate => self.alternate_next,
            FirstPlayerMode::Random => {
                if self.rng.random_bool() {
                    HUMAN_SIDE
                } else {
                    COMPUTER_SIDE
                }
            }
        }
    }

    pub fn finish_game(&mut self, first: Side, outcome: Outcome) {
        if !outcome.is_terminal() {
            return;
        }
        self.scoreboard.record(outcome);
        self.alternate_next = first.opponent();
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
