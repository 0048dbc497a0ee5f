//! Error types for moves, commands, configuration and simulation I/O.
//!
//! None of these are fatal to a game: the command dispatcher absorbs
//! `MoveError` and `CommandError` and reports a failed turn.

use thiserror::Error;

use crate::cards::Card;
use crate::zones::Column;

/// A move whose preconditions do not hold. The game state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no cards left in the stock or waste")]
    StockExhausted,

    #[error("the waste pile is empty")]
    EmptyWaste,

    #[error("column {0} has no exposed cards")]
    EmptyColumn(Column),

    #[error("cannot place an empty run")]
    EmptyRun,

    #[error("cannot move column {0} onto itself")]
    SameColumn(Column),

    #[error("{0} cannot be placed on the foundation")]
    FoundationRejects(Card),

    #[error("{card} cannot be placed on column {column}")]
    TableauRejects { card: Card, column: Column },

    #[error("no run in column {src} can be placed on column {dst}")]
    NoMovableRun { src: Column, dst: Column },
}

/// Command text that does not describe a move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("not a valid command: {0:?}")]
    Unknown(String),

    #[error("invalid tableau column in {0:?}")]
    InvalidColumn(String),
}

/// Card notation that cannot be parsed (e.g. `"11x"`).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid card notation: {0:?}")]
pub struct CardParseError(pub String);

/// Invalid engine or strategy configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("rule order must be a permutation of 1..=5, got {0:?}")]
    RuleOrder(Vec<u8>),

    #[error("column order must be a permutation of 0..7, got {0:?}")]
    ColumnOrder(Vec<usize>),

    #[error("unknown rule id {0}")]
    UnknownRule(u8),

    #[error("column index {0} is out of range 0..7")]
    ColumnIndex(u8),

    #[error("rank {0} is out of range 1..=13")]
    RankValue(u8),

    #[error("deck count must be at least 1")]
    NoDecks,
}

/// Failures of the simulation driver (never of a single game).
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("metrics log I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid simulation config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
