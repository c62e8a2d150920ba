use std::path::PathBuf;

use checkers_core::BoardError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid match config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("unknown engine {0:?} (expected minimax, mcts or random)")]
    UnknownEngine(String),
    #[error("unknown strategy {0:?} (expected minimax or mcts)")]
    UnknownStrategy(String),
}
