//! Monte Carlo Tree Search Checkers Engine
//!
//! UCB1 tree search with uniformly random playouts. Each playout is judged
//! by final piece count, so the engine needs no evaluation function.
//!
//! Randomness comes from an owned [`StdRng`]; build the engine with
//! [`MctsEngine::with_seed`] to get the same move for the same position on
//! every run.

mod tree;

use std::time::Instant;

use checkers_core::{Board, Engine, Player, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;


pub use tree::{search, ucb1, MctsConfig, MctsOutcome, DEFAULT_EXPLORATION};

/// A checkers engine driven by Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsEngine {
    config: MctsConfig,
    rng: StdRng,
    nodes: u64,
}

impl MctsEngine {
    pub fn new() -> Self {
        Self::with_rng(MctsConfig::default(), StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(MctsConfig::default(), StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: MctsConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

impl Default for MctsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MctsEngine {
    fn search(&mut self, board: &Board, player: Player, limits: SearchLimits) -> SearchResult {
        let started = Instant::now();
        let outcome = tree::search(board, player, limits.iterations, &self.config, &mut self.rng);
        self.nodes = outcome.map_or(1, |o| o.nodes as u64);

        debug!(
            %player,
            iterations = limits.iterations,
            nodes = self.nodes,
            visits = ?outcome.map(|o| o.visits),
            wins = ?outcome.map(|o| o.wins),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "mcts search finished"
        );

        SearchResult {
            best_move: outcome.map(|o| o.best_move),
            score: outcome.map_or(0, |o| o.wins.clamp(i32::MIN as i64, i32::MAX as i64) as i32),
            depth: 0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "MCTS v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
