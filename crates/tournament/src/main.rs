//! Tournament CLI
//!
//! Run matches between checkers engines and report Elo ratings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tournament::{create_engine, MatchConfig, MatchRunner, TournamentResults};
use tracing_subscriber::EnvFilter;

/// Engines a gauntlet challenger plays against
const GAUNTLET_OPPONENTS: [&str; 3] = ["minimax", "mcts", "random"];

#[derive(Debug, Parser)]
#[command(name = "tournament", about = "ML-checkers tournament runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    opts: MatchOpts,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play two engines against each other
    Match { engine1: String, engine2: String },
    /// Play one engine against every other engine
    Gauntlet { challenger: String },
}

#[derive(Debug, Args)]
struct MatchOpts {
    /// TOML match config; flags below override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Games per match
    #[arg(short, long, global = true)]
    games: Option<u32>,
    /// Minimax depth
    #[arg(short, long, global = true)]
    depth: Option<u8>,
    /// MCTS iterations per move
    #[arg(short, long, global = true)]
    iterations: Option<u32>,
    /// Board size (even, at least 4)
    #[arg(short, long, global = true)]
    size: Option<usize>,
    /// Seed for the randomized engines
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Write the JSON report here
    #[arg(long, global = true)]
    report: Option<PathBuf>,
}

impl MatchOpts {
    fn match_config(&self) -> Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => MatchConfig::default(),
        };
        if let Some(games) = self.games {
            config.num_games = games;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(size) = self.size {
            config.board_size = size;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.opts.match_config()?;

    let (name, pairings): (String, Vec<(String, String)>) = match &cli.command {
        Command::Match { engine1, engine2 } => (
            format!("{engine1} vs {engine2}"),
            vec![(engine1.clone(), engine2.clone())],
        ),
        Command::Gauntlet { challenger } => (
            format!("{challenger} gauntlet"),
            GAUNTLET_OPPONENTS
                .iter()
                .filter(|opponent| !opponent.eq_ignore_ascii_case(challenger))
                .map(|opponent| (challenger.clone(), opponent.to_string()))
                .collect(),
        ),
    };

    println!("=== {name} ===");
    println!(
        "Board: {}x{}, Games: {}, Depth: {}, Iterations: {}",
        config.board_size, config.board_size, config.num_games, config.depth, config.iterations
    );
    println!();

    let runner = MatchRunner::new(config.clone())?;
    let mut results = TournamentResults::new(&name, config);

    for (i, (spec1, spec2)) in pairings.iter().enumerate() {
        // Each engine in each pairing gets its own seed
        let seed = |offset: u64| cli.opts.seed.map(|s| s.wrapping_add(2 * i as u64 + offset));
        let mut engine1 = create_engine(spec1, seed(0), &runner.config().mcts)?;
        let mut engine2 = create_engine(spec2, seed(1), &runner.config().mcts)?;

        let result = runner.run_match(engine1.as_mut(), engine2.as_mut());
        println!(
            "{spec1} vs {spec2}: {} wins, {} losses, {} draws ({:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );
        results.add_match(spec1, spec2, result);
    }

    println!();
    results.print_report();

    if let Some(path) = &cli.opts.report {
        results
            .save(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
