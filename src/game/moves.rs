//! Move representation: the five kinds of turn a game accepts.
//!
//! Moves are typed values rather than strings, so a constructed `Move`
//! always names in-range columns. The text command surface (`mv`, `wf`,
//! `wt3`, `tf1`, `tt12`) is handled by `Move::parse` and `Display`:
//!
//! ```
//! use klondike_autoplay::game::Move;
//! use klondike_autoplay::zones::Column;
//!
//! let mv = Move::parse(" TT 1 3 ").unwrap();
//! assert_eq!(
//!     mv,
//!     Move::TableauToTableau { src: Column::new(0).unwrap(), dst: Column::new(2).unwrap() }
//! );
//! assert_eq!(mv.to_string(), "tt13");
//! assert!(Move::parse("wt9").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;
use crate::zones::Column;

/// One turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Stock to waste (`mv`).
    Draw,
    /// Waste top to its foundation (`wf`).
    WasteToFoundation,
    /// Waste top to a tableau column (`wt<col>`).
    WasteToTableau { dst: Column },
    /// Column top to its foundation (`tf<col>`).
    TableauToFoundation { src: Column },
    /// Longest placeable run from one column to another (`tt<src><dst>`).
    TableauToTableau { src: Column, dst: Column },
}

impl Move {
    /// Parse a command. Case and whitespace are ignored.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let command: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        if command.is_empty() {
            return Err(CommandError::Empty);
        }

        let unknown = || CommandError::Unknown(command.clone());
        let verb = command.get(..2).ok_or_else(unknown)?;
        let args: Vec<char> = command[2..].chars().collect();

        let column = |digit: char| {
            Column::from_digit(digit).ok_or_else(|| CommandError::InvalidColumn(command.clone()))
        };

        match (verb, args.as_slice()) {
            ("mv", []) => Ok(Move::Draw),
            ("wf", []) => Ok(Move::WasteToFoundation),
            ("wt", &[d]) => Ok(Move::WasteToTableau { dst: column(d)? }),
            ("tf", &[s]) => Ok(Move::TableauToFoundation { src: column(s)? }),
            ("tt", &[s, d]) => Ok(Move::TableauToTableau {
                src: column(s)?,
                dst: column(d)?,
            }),
            _ => Err(unknown()),
        }
    }

    /// Points awarded when this move succeeds.
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Move::Draw => 0,
            Move::WasteToFoundation | Move::TableauToFoundation { .. } => 10,
            Move::WasteToTableau { .. } | Move::TableauToTableau { .. } => 5,
        }
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, Move::Draw)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Draw => f.write_str("mv"),
            Move::WasteToFoundation => f.write_str("wf"),
            Move::WasteToTableau { dst } => write!(f, "wt{dst}"),
            Move::TableauToFoundation { src } => write!(f, "tf{src}"),
            Move::TableauToTableau { src, dst } => write!(f, "tt{src}{dst}"),
        }
    }
}

impl FromStr for Move {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

/// A successful move in the game's audit trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move applied.
    pub mv: Move,

    /// Points it scored.
    pub score: u32,

    /// 1-based position in the game's move sequence.
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(mv: Move, sequence: u32) -> Self {
        Self {
            mv,
            score: mv.score(),
            sequence,
        }
    }
}
