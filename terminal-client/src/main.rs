mod config;
mod game_loop;
mod input;
mod match_session;
mod renderer;

use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use tictactoe_common::games::SessionRng;
use tictactoe_common::log;
use tictactoe_common::logger::{self, LogSink};

use config::FirstPlayerMode;
use game_loop::GameLoop;
use match_session::MatchSession;

#[derive(Parser)]
#[command(name = "tictactoe_terminal", about = "Tic-tac-toe against a computer that never loses")]
struct Args {
    /// YAML config file, defaults to tictactoe_terminal.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides who opens each game
    #[arg(long, value_enum)]
    first: Option<FirstPlayerMode>,

    /// Seed for the random opener mode
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config::get_config_path);
    let mut config = config::get_config_manager(config_path.clone()).get_config()?;
    if let Some(first) = args.first {
        config.first_player = first;
    }

    let prefix = if args.use_log_prefix {
        Some("Terminal".to_string())
    } else {
        None
    };
    let sink = match &config.log_file {
        Some(path) => LogSink::file(Path::new(path))?,
        None => LogSink::Stderr,
    };
    logger::init_logger(prefix, sink);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let session = MatchSession::new(config.first_player, rng);

    log!(
        "Config {}: first player {:?}, seed {}",
        config_path.display(),
        config.first_player,
        session.seed()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let scoreboard = GameLoop::new(stdin.lock(), stdout.lock(), &config, session).run()?;

    log!("Final score: {}", scoreboard);
    println!("Final score: {}", scoreboard);

    Ok(())
}
