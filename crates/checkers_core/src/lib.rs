pub mod board;
pub mod eval;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use eval::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait: implemented by all checkers engines (minimax, MCTS, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score from the engine's perspective (material for minimax,
    /// accumulated playout result for MCTS)
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Limits handed to an engine for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (minimax)
    pub depth: u8,
    /// Number of select/expand/simulate/backpropagate rounds (MCTS)
    pub iterations: u32,
}

impl SearchLimits {
    pub fn new(depth: u8, iterations: u32) -> Self {
        Self { depth, iterations }
    }

    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn iterations(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: 3,
            iterations: 1000,
        }
    }
}

/// Trait that all checkers engines must implement.
///
/// Engines run to completion and block the caller; hosts with an event loop
/// should call `search` off that loop.
pub trait Engine: Send {
    /// Search the position for `player` with the given limits.
    ///
    /// The returned move is the first move of a turn; the caller expands it
    /// with [`resolve_capture_chain`].
    fn search(&mut self, board: &Board, player: Player, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-checkers"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
