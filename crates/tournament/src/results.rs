//! Tournament results and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::elo::{EloTracker, MatchResult};
use crate::error::TournamentError;
use crate::match_runner::MatchConfig;

/// Everything a tournament run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    /// Match results in the order they were played
    pub matches: Vec<MatchEntry>,
    /// Configuration used for every match
    pub config: MatchConfig,
    /// Ratings after the last match
    pub elo: EloTracker,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

impl TournamentResults {
    pub fn new(name: &str, config: MatchConfig) -> Self {
        Self {
            name: name.to_string(),
            participants: Vec::new(),
            matches: Vec::new(),
            config,
            elo: EloTracker::new(),
        }
    }

    /// Record a finished match and update ratings
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        for engine in [engine1, engine2] {
            if !self.participants.iter().any(|p| p == engine) {
                self.participants.push(engine.to_string());
            }
        }
        self.elo.update_ratings(engine1, engine2, &result);
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    pub fn to_json(&self) -> Result<String, TournamentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TournamentError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {}x{} board, {} games/match, depth {}, {} iterations\n\n",
            self.config.board_size,
            self.config.board_size,
            self.config.num_games,
            self.config.depth,
            self.config.iterations
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<12} vs {:<12} {:>5}-{:<5}-{:<5} {:>6}\n",
            "Engine 1", "Engine 2", "W", "L", "D", "Score"
        ));
        report.push_str(&"-".repeat(56));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<12} vs {:<12} {:>5}-{:<5}-{:<5} {:>5.1}%\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws,
                entry.result.score() * 100.0
            ));
        }

        report.push('\n');
        report.push_str(&self.elo.format_leaderboard());
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
