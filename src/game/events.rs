//! Diagnostic events recorded by a game.
//!
//! When `GameConfig::diagnostics` is on, every command produces one
//! `GameEvent`. Callers decide where (or whether) to print them; the engine
//! itself never writes to the console.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Outcome of one command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The move was applied.
    MoveApplied {
        mv: Move,
        score: u32,
        sequence: u32,
    },

    /// The move was legal to express but not to play.
    MoveRejected { mv: Move, reason: String },

    /// The command text did not describe a move.
    CommandRejected { input: String, reason: String },
}

impl GameEvent {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, GameEvent::MoveApplied { .. })
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::MoveApplied { mv, .. } => write!(f, "Success! {mv}"),
            GameEvent::MoveRejected { mv, reason } => write!(f, "Error! {mv}: {reason}"),
            GameEvent::CommandRejected { reason, .. } => write!(f, "Error! {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let applied = GameEvent::MoveApplied {
            mv: Move::WasteToFoundation,
            score: 10,
            sequence: 1,
        };
        assert!(applied.is_success());
        assert_eq!(applied.to_string(), "Success! wf");

        let rejected = GameEvent::MoveRejected {
            mv: Move::Draw,
            reason: "no cards left in the stock or waste".into(),
        };
        assert!(!rejected.is_success());
        assert_eq!(rejected.to_string(), "Error! mv: no cards left in the stock or waste");
    }

    #[test]
    fn test_serialization() {
        let event = GameEvent::CommandRejected {
            input: "zz".into(),
            reason: "not a valid command".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
