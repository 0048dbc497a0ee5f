//! Card model: ranks, suits, colors and the shuffled deck.
//!
//! ## Key Types
//!
//! - `Card`: immutable rank/suit value with adjacency and color predicates
//! - `Rank`, `Suit`, `Color`: the pieces a card is built from
//! - `Deck`: shuffled `N × 52` cards consumed by the initial deal

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::Deck;
