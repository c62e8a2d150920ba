//! Classical Checkers Engine
//!
//! Alpha-beta minimax search with material-based evaluation.
//! This is the deterministic baseline next to the MCTS engine.

mod search;

use std::time::Instant;

use checkers_core::{Board, Engine, Player, SearchLimits, SearchResult};
use tracing::debug;

/// Classical checkers engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Fixed-depth minimax with alpha-beta pruning
/// - Whole turns (capture chains) as tree edges
/// - Simple material evaluation (man = 2, king = 5)
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, player: Player, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        let started = Instant::now();
        let result = search::pick_best_move(board, player, limits.depth, &mut self.nodes);

        debug!(
            %player,
            depth = limits.depth,
            nodes = self.nodes,
            score = ?result.map(|(_, s)| s),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "minimax search finished"
        );

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use checkers_core::evaluate;
pub use search::{minimax, pick_best_move};
