mod board_notation;
mod commands;
mod config;
mod console_listener;
mod session_rng;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tictactoe_engine::logger;
use tictactoe_engine::tictactoe::Side;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Headless host for the minimax tic-tac-toe engine")]
struct Args {
    /// YAML config file; defaults to tictactoe_config.yaml next to the executable
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    use_log_prefix: bool,

    /// Also print search traces and individual moves
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the computer's move for a board, e.g. "XX.OO...."
    Suggest {
        #[arg(long)]
        board: String,
        /// Side the human plays; the computer plays the other one
        #[arg(long)]
        side: Option<Side>,
    },
    /// Play scripted human moves against the computer
    Play {
        #[arg(long)]
        side: Option<Side>,
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,
    },
    /// Random human moves against the computer
    Simulate {
        #[arg(long)]
        games: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        side: Option<Side>,
    },
    /// Try every human line against the computer
    Audit {
        #[arg(long)]
        side: Option<Side>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = config::load_config(args.config.as_deref())?;

    match args.command {
        Command::Suggest { board, side } => {
            commands::suggest(&board, side.unwrap_or(config.player_side), &config)?
        }
        Command::Play { side, moves } => {
            commands::play(side.unwrap_or(config.player_side), &moves, &config)?
        }
        Command::Simulate { games, seed, side } => commands::simulate(
            games.unwrap_or(config.simulation.games),
            seed.or(config.simulation.seed),
            side.unwrap_or(config.player_side),
            &config,
        )?,
        Command::Audit { side } => commands::audit(side.unwrap_or(config.player_side), &config)?,
    }

    Ok(())
}
