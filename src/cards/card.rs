//! Playing card value type.
//!
//! A `Card` is a rank and a suit, plus a cosmetic `face_up` flag that
//! never takes part in legality checks or equality.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CardParseError, ConfigError};

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, or `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    fn name(self) -> &'static str {
        const NAMES: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        NAMES[(self.0 - 1) as usize]
    }
}

impl TryFrom<u8> for Rank {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ConfigError::RankValue(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card color, which decides alternation in tableau runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// All suits, in foundation display order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Heart, Suit::Spade, Suit::Diamond];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Club | Suit::Spade => Color::Black,
            Suit::Diamond | Suit::Heart => Color::Red,
        }
    }

    /// Uppercase first letter of the suit name.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }

    /// Stable index 0..4, used to address foundation stacks.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Some(Suit::Club),
            'd' | '♦' => Some(Suit::Diamond),
            'h' | '♥' => Some(Suit::Heart),
            's' | '♠' => Some(Suit::Spade),
            _ => None,
        }
    }
}

/// A playing card.
///
/// Rank and suit are fixed at construction. `face_up` is display state
/// only, so two cards with the same rank and suit compare equal whatever
/// their orientation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Toggle the display orientation.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    #[must_use]
    pub fn is_king(&self) -> bool {
        self.rank == Rank::KING
    }

    /// True if `self` is exactly one rank lower than `other`.
    #[must_use]
    pub fn is_below(&self, other: &Card) -> bool {
        self.rank.value() + 1 == other.rank.value()
    }

    /// True if the two cards are of different colors.
    #[must_use]
    pub fn is_opposite_color(&self, other: &Card) -> bool {
        self.color() != other.color()
    }

    /// True if `other` may be placed directly on `self` in a tableau run.
    #[must_use]
    pub fn can_attach(&self, other: &Card) -> bool {
        other.is_below(self) && other.is_opposite_color(self)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parse `"10h"`, `"Qs"`, `"a♦"` and similar: rank then suit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CardParseError(s.to_string());
        let trimmed = s.trim();
        let suit_char = trimmed.chars().last().ok_or_else(err)?;
        let suit = Suit::from_char(suit_char).ok_or_else(err)?;
        let rank_text = &trimmed[..trimmed.len() - suit_char.len_utf8()];

        let value = match rank_text.to_ascii_uppercase().as_str() {
            "A" => 1,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            digits => digits.parse::<u8>().map_err(|_| err())?,
        };
        let rank = Rank::new(value).ok_or_else(err)?;

        Ok(Card::new(rank, suit))
    }
}
