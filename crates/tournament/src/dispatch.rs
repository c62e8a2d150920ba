//! AI move selection: picks a search strategy and returns one move.

use std::fmt;
use std::str::FromStr;

use checkers_core::{Board, Engine, Move, Player};
use classical_engine::{pick_best_move, ClassicalEngine};
use mcts_engine::{MctsConfig, MctsEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;

/// Search strategy used for an AI turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Minimax,
    Mcts,
}

impl FromStr for Strategy {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" | "minmax" => Ok(Strategy::Minimax),
            "mcts" => Ok(Strategy::Mcts),
            _ => Err(TournamentError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::Mcts => write!(f, "mcts"),
        }
    }
}

/// Chooses a move for `player`.
///
/// Minimax searches `depth` turns; MCTS runs `iterations` rounds (at least
/// one) drawing randomness from `rng`. The returned move is the first step
/// of a turn: expand it with `resolve_capture_chain` before passing the
/// turn. `None` means `player` has no legal move and has lost.
pub fn choose_move<R: Rng>(
    board: &Board,
    player: Player,
    strategy: Strategy,
    depth: u8,
    iterations: u32,
    rng: &mut R,
) -> Option<Move> {
    match strategy {
        Strategy::Minimax => {
            let mut nodes = 0;
            pick_best_move(board, player, depth, &mut nodes).map(|(mv, _)| mv)
        }
        Strategy::Mcts => {
            let config = MctsConfig::default();
            mcts_engine::search(board, player, iterations.max(1), &config, rng)
                .map(|outcome| outcome.best_move)
        }
    }
}

/// Builds an engine from its name: `minimax` (or `classical`), `mcts`,
/// `random`. A seed makes the randomized engines reproducible.
pub fn create_engine(
    spec: &str,
    seed: Option<u64>,
    mcts: &MctsConfig,
) -> Result<Box<dyn Engine>, TournamentError> {
    let rng = || match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    match spec.to_lowercase().as_str() {
        "minimax" | "minmax" | "classical" => Ok(Box::new(ClassicalEngine::new())),
        "mcts" => Ok(Box::new(MctsEngine::with_rng(*mcts, rng()))),
        "random" => Ok(Box::new(match seed {
            Some(s) => RandomEngine::with_seed(s),
            None => RandomEngine::new(),
        })),
        _ => Err(TournamentError::UnknownEngine(spec.to_string())),
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod dispatch_tests;
