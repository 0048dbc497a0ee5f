//! Per-game configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings fixed for the lifetime of one `Game`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of 52-card decks shuffled together.
    /// Everything not dealt to the tableau goes to the stock.
    pub deck_count: usize,

    /// Record a structured `GameEvent` for every command.
    /// Off by default; simulations only need the final metrics.
    pub diagnostics: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deck_count: 1,
            diagnostics: false,
        }
    }
}

impl GameConfig {
    /// Set the number of decks.
    pub fn with_deck_count(mut self, count: usize) -> Self {
        self.deck_count = count;
        self
    }

    /// Enable or disable event recording.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// Check that a game can be dealt with this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_count == 0 {
            return Err(ConfigError::NoDecks);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.deck_count, 1);
        assert!(!config.diagnostics);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_decks_rejected() {
        let config = GameConfig::default().with_deck_count(0);
        assert_eq!(config.validate(), Err(ConfigError::NoDecks));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_diagnostics(true).with_deck_count(2);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
