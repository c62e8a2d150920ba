//! Console checkers
//!
//! White is entered at the keyboard. Black is a second human or an AI
//! (minimax or MCTS).

mod session;

use std::io;

use anyhow::{Context, Result};
use checkers_core::Board;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tournament::Strategy;
use tracing_subscriber::EnvFilter;

use session::{Session, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Human,
    #[value(alias = "minmax")]
    Minimax,
    Mcts,
}

#[derive(Debug, Parser)]
#[command(name = "checkers", about = "Play checkers in the terminal")]
struct Cli {
    /// Board size (even, at least 4)
    #[arg(short, long, default_value_t = 8)]
    size: usize,
    /// Who plays Black
    #[arg(short, long, value_enum, default_value_t = Opponent::Human)]
    opponent: Opponent,
    /// Minimax search depth
    #[arg(short, long, default_value_t = 3)]
    depth: u8,
    /// MCTS iterations per move
    #[arg(short, long, default_value_t = 1000)]
    iterations: u32,
    /// Seed for MCTS playouts
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let board = Board::new(cli.size).context("cannot set up the board")?;

    let settings = Settings {
        ai: match cli.opponent {
            Opponent::Human => None,
            Opponent::Minimax => Some(Strategy::Minimax),
            Opponent::Mcts => Some(Strategy::Mcts),
        },
        depth: cli.depth,
        iterations: cli.iterations,
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    session.play(board, settings, &mut rng)?;
    Ok(())
}
