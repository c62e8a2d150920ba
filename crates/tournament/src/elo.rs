//! Elo ratings for engines that meet in matches

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rating given to an engine the first time it plays
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor applied per game
pub const K_FACTOR: f64 = 32.0;

/// Outcome of one game, from a chosen engine's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// Result string in the usual `1-0` / `0-1` / `1/2` form
    pub fn as_score_str(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
        }
    }
}

/// Tally of a match, from the first engine's point of view
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points per game: 1 for a win, 0.5 for a draw. An empty match scores 0.5.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total as f64
    }
}

/// Rating change caused by one match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingChange {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    /// Points gained by `engine1` (and lost by `engine2`)
    pub delta: f64,
}

/// Ratings of every engine seen so far in this run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    ratings: BTreeMap<String, f64>,
    games_played: BTreeMap<String, u32>,
    history: Vec<RatingChange>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating(&self, engine: &str) -> f64 {
        self.ratings.get(engine).copied().unwrap_or(DEFAULT_ELO)
    }

    pub fn games_played(&self, engine: &str) -> u32 {
        self.games_played.get(engine).copied().unwrap_or(0)
    }

    pub fn history(&self) -> &[RatingChange] {
        &self.history
    }

    /// Expected per-game score of `engine1` against `engine2`
    pub fn expected_score(&self, engine1: &str, engine2: &str) -> f64 {
        let diff = self.rating(engine2) - self.rating(engine1);
        1.0 / (1.0 + 10.0_f64.powf(diff / 400.0))
    }

    /// Apply a whole match at once. Returns the change for `engine1`.
    pub fn update_ratings(&mut self, engine1: &str, engine2: &str, result: &MatchResult) -> f64 {
        let games = result.total_games();
        let expected = self.expected_score(engine1, engine2);
        let delta = K_FACTOR * games as f64 * (result.score() - expected);

        let r1 = self.rating(engine1);
        let r2 = self.rating(engine2);
        self.ratings.insert(engine1.to_string(), r1 + delta);
        self.ratings.insert(engine2.to_string(), r2 - delta);

        for engine in [engine1, engine2] {
            *self.games_played.entry(engine.to_string()).or_insert(0) += games;
        }

        self.history.push(RatingChange {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result: *result,
            delta,
        });
        delta
    }

    /// Engines sorted by rating, best first
    pub fn leaderboard(&self) -> Vec<(&str, f64, u32)> {
        let mut board: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, &rating)| (name.as_str(), rating, self.games_played(name)))
            .collect();
        board.sort_by(|a, b| b.1.total_cmp(&a.1));
        board
    }

    pub fn format_leaderboard(&self) -> String {
        let mut out = String::from("=== Elo Leaderboard ===\n");
        out.push_str(&format!("{:<4} {:<16} {:>8} {:>6}\n", "#", "Engine", "Elo", "Games"));
        for (i, (name, rating, games)) in self.leaderboard().into_iter().enumerate() {
            out.push_str(&format!("{:<4} {:<16} {:>8.1} {:>6}\n", i + 1, name, rating, games));
        }
        out
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
