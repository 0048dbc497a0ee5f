//! Autoplay strategies.
//!
//! A strategy is a priority-ordered list of five move rules and a column scan
//! order. One decision cycle:
//!
//! 1. If the waste is empty, draw.
//! 2. Otherwise try each rule in order and play the first move found.
//! 3. If no rule applies, draw anyway.
//!
//! | Id | Rule |
//! |---|---|
//! | 1 | tableau top to foundation |
//! | 2 | waste top to foundation |
//! | 3 | King into an empty column |
//! | 4 | waste top onto a non-empty column |
//! | 5 | whole exposed run onto another column |

pub mod heuristic;
pub mod rule;

pub use heuristic::Strategy;
pub use rule::{ColumnOrder, Rule, RuleOrder, RULE_COUNT};

use crate::game::Game;

/// What one decision cycle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The waste was empty and a card was drawn.
    Drew,
    /// A rule played a move.
    Applied(Rule),
    /// No rule applied; a card was drawn instead.
    ForcedDraw,
    /// Nothing applied and the draw failed.
    Stuck,
}

impl Decision {
    /// True if the cycle changed the game.
    #[must_use]
    pub fn made_progress(self) -> bool {
        !matches!(self, Decision::Stuck)
    }
}

/// Chooses and plays one decision cycle on a game.
pub trait Policy: Send + Sync {
    fn decide(&self, game: &mut Game) -> Decision;
}
