//! # klondike-autoplay
//!
//! A Klondike Solitaire engine with a rule-ordered heuristic autoplayer for
//! simulating many games and collecting outcome statistics.
//!
//! ## Design Principles
//!
//! 1. **Single Mutation Entry Point**: After the deal, zones only change
//!    through `Game::take_turn`. Failed moves change nothing.
//!
//! 2. **Typed Moves**: Commands parse into `Move` once; zone operations
//!    never see raw strings.
//!
//! 3. **Deterministic**: Every shuffle goes through a seeded `GameRng`, and
//!    the autoplayer has no randomness, so a seed and a strategy fix a game.
//!
//! ## Architecture
//!
//! - **Greedy Strategy**: Five built-in rules scanned in a configured
//!   priority order, with a configured column scan order inside each rule.
//!
//! - **Iterative Driver**: The decision loop counts cycles and stops at a
//!   turn cap rather than recursing.
//!
//! - **Embarrassingly Parallel**: Games share nothing, so batches can run
//!   on the rayon pool with per-game seeds forked up front.
//!
//! ## Modules
//!
//! - `core`: RNG and engine configuration
//! - `cards`: Card, rank, suit and deck
//! - `zones`: Tableau, foundation and stock/waste
//! - `game`: Move dispatch, scoring, history and metrics
//! - `strategy`: Heuristic rules and their orders
//! - `simulation`: Batch driver, metrics log, statistics and rule sweeps
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod zones;
pub mod game;
pub mod strategy;
pub mod simulation;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng};

pub use crate::cards::{Card, Color, Deck, Rank, Suit};

pub use crate::zones::{Column, Foundation, FoundationTop, StockWaste, Tableau, TableauColumn};

pub use crate::game::{Game, GameEvent, GameMetrics, Move, MoveRecord};

pub use crate::strategy::{ColumnOrder, Decision, Policy, Rule, RuleOrder, Strategy};

pub use crate::simulation::{
    GameOutcome, MetricsLog, Simulation, SimulationConfig, SimulationReport, SimulationStats,
    Sweep, SweepSummary, Termination,
};

pub use crate::error::{CardParseError, CommandError, ConfigError, MoveError, SimulationError};
