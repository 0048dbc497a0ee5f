//! Shuffled deck used to deal a game.

use crate::core::rng::GameRng;

use super::card::{Card, Rank, Suit};

/// A shuffled multiset of `deck_count × 52` cards.
///
/// The top of the deck is the end of the sequence. The deck only shrinks:
/// it exists to deal the initial layout and is dropped afterwards.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build and shuffle `deck_count` standard decks.
    #[must_use]
    pub fn new(deck_count: usize, rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(deck_count * 52);
        for _ in 0..deck_count {
            for rank in Rank::all() {
                cards.extend(Suit::ALL.iter().map(|&suit| Card::new(rank, suit)));
            }
        }
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Build a deck in a fixed order; the last card is dealt first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remaining card count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the top card.
    pub fn flip_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove the top `n` cards, returned in the order they were taken.
    ///
    /// Returns `None` and leaves the deck untouched if fewer than `n`
    /// cards remain.
    pub fn deal_cards(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }
        let split = self.cards.len() - n;
        let mut dealt = self.cards.split_off(split);
        dealt.reverse();
        Some(dealt)
    }
}
