//! Simulation driver configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;
use crate::error::SimulationError;

/// How many games to play, how long each may run and where metrics go.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Games per run.
    pub num_runs: usize,

    /// Decision cycles allowed per game before it is recorded as a loss.
    pub max_turns: u32,

    /// Base seed; per-game seeds are forked from it.
    pub seed: u64,

    /// Play games on the rayon pool. Outcomes keep run order either way.
    pub parallel: bool,

    /// Record `GameEvent`s in each game.
    pub diagnostics: bool,

    /// Decks per game.
    pub deck_count: usize,

    /// Metrics log to create; `None` writes nothing.
    pub log_path: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            max_turns: 100,
            seed: 42,
            parallel: false,
            diagnostics: false,
            deck_count: 1,
            log_path: None,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn with_runs(mut self, num_runs: usize) -> Self {
        self.num_runs = num_runs;
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_deck_count(mut self, deck_count: usize) -> Self {
        self.deck_count = deck_count;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Per-game engine configuration.
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_deck_count(self.deck_count)
            .with_diagnostics(self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.num_runs, 100);
        assert_eq!(config.max_turns, 100);
        assert_eq!(config.seed, 42);
        assert!(!config.parallel);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_builders() {
        let config = SimulationConfig::new()
            .with_runs(10)
            .with_max_turns(500)
            .with_seed(7)
            .with_parallel(true)
            .with_log_path("out.csv");

        assert_eq!(config.num_runs, 10);
        assert_eq!(config.max_turns, 500);
        assert_eq!(config.seed, 7);
        assert!(config.parallel);
        assert_eq!(config.log_path, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_game_config() {
        let game = SimulationConfig::new()
            .with_deck_count(2)
            .with_diagnostics(true)
            .game_config();
        assert_eq!(game.deck_count, 2);
        assert!(game.diagnostics);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{"num_runs": 5, "parallel": true}"#).unwrap();
        assert_eq!(config.num_runs, 5);
        assert!(config.parallel);
        assert_eq!(config.max_turns, 100);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = SimulationConfig::new().with_runs(3).with_log_path("log.csv");
        let json = serde_json::to_string(&config).unwrap();
        let restored: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
