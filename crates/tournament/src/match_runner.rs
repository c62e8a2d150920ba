//! Match runner for playing games between engines

use std::path::Path;

use checkers_core::{legal_moves, resolve_capture_chain, Board, Engine, Player, SearchLimits};
use mcts_engine::MctsConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::elo::{GameResult, MatchResult};
use crate::error::TournamentError;

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Board side length (even, at least 4)
    pub board_size: usize,
    /// Number of games to play
    pub num_games: u32,
    /// Minimax search depth in turns
    pub depth: u8,
    /// MCTS iterations per move
    pub iterations: u32,
    /// Turns per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log every game result
    pub verbose: bool,
    /// Settings for MCTS engines in this match
    pub mcts: MctsConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            num_games: 10,
            depth: 3,
            iterations: 1000,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
            mcts: MctsConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, TournamentError> {
        let config: MatchConfig = toml::from_str(s)?;
        Board::new(config.board_size)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TournamentError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    fn search_limits(&self) -> SearchLimits {
        SearchLimits::new(self.depth, self.iterations)
    }
}

/// Runs matches between two engines
#[derive(Debug, Clone)]
pub struct MatchRunner {
    config: MatchConfig,
    start: Board,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Result<Self, TournamentError> {
        let start = Board::new(config.board_size)?;
        Ok(Self { config, start })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flip()
            };
            result.record(game_result);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    engine1 = engine1.name(),
                    color = if engine1_white { "W" } else { "B" },
                    outcome = game_result.as_score_str(),
                    wins = result.wins,
                    losses = result.losses,
                    draws = result.draws,
                    "game finished"
                );
            }
        }

        result
    }

    /// Play a single game, returns result from white's perspective
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameResult {
        let mut board = self.start.clone();
        white.new_game();
        black.new_game();

        let limits = self.config.search_limits();
        let mut player = Player::White;

        for _turn in 0..self.config.max_moves {
            let engine: &mut dyn Engine = match player {
                Player::White => &mut *white,
                Player::Black => &mut *black,
            };
            let result = engine.search(&board, player, limits);

            let Some(mv) = result.best_move else {
                return loss_for(player);
            };
            if !legal_moves(&board, player).contains(&mv) {
                warn!(engine = engine.name(), %player, %mv, "engine played an illegal move");
                return loss_for(player);
            }

            resolve_capture_chain(&mut board, mv, player);
            if board.count(player.other()) == 0 {
                return loss_for(player.other());
            }
            player = player.other();
        }

        GameResult::Draw
    }
}

/// Game result for White when `loser` has just lost
fn loss_for(loser: Player) -> GameResult {
    match loser {
        Player::White => GameResult::Loss,
        Player::Black => GameResult::Win,
    }
}

/// Quick utility to run a single match on the standard board
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> Result<MatchResult, TournamentError> {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config)?;
    Ok(runner.run_match(engine1, engine2))
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
