use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Who opens each game of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    Human,
    Computer,
    /// Human opens the first game, then the opener flips after every finished game.
    Alternate,
    Random,
}
