//! Tournament Runner and AI dispatch for ML-checkers
//!
//! This crate provides infrastructure for:
//! - Picking a move with a named search strategy (minimax or MCTS)
//! - Running matches between different engines
//! - Tracking Elo ratings across a run
//! - Generating text and JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Run a match between minimax and MCTS on a 6x6 board
//! cargo run -p tournament -- match minimax mcts --games 20 --size 6
//!
//! # Run a gauntlet (one engine vs all others)
//! cargo run -p tournament -- gauntlet mcts --games 10 --iterations 200
//! ```

mod dispatch;
mod elo;
mod error;
mod match_runner;
mod results;

pub use dispatch::*;
pub use elo::*;
pub use error::TournamentError;
pub use match_runner::*;
pub use results::*;
