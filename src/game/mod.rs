//! Game orchestration: move dispatch, scoring, history and metrics.
//!
//! ## Key Types
//!
//! - `Game`: owns the zones; `take_turn` is the single mutation entry point
//! - `Move`: typed command (`mv`, `wf`, `wt<c>`, `tf<c>`, `tt<c><c>`)
//! - `MoveRecord`: audit trail entry
//! - `GameEvent`: structured diagnostics, recorded when enabled
//! - `GameMetrics`: final score, moves, duration and win flag
//!
//! ## Scoring
//!
//! | Move | Points |
//! |---|---|
//! | `mv` | 0 |
//! | `wf`, `tf<c>` | 10 |
//! | `wt<c>`, `tt<c><c>` | 5 |

pub mod events;
pub mod metrics;
pub mod moves;
pub mod state;

pub use events::GameEvent;
pub use metrics::GameMetrics;
pub use moves::{Move, MoveRecord};
pub use state::Game;

pub use crate::zones::Column;
