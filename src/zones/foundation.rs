//! The four suit-ordered foundation stacks.

use std::fmt;

use crate::cards::{Card, Rank, Suit};
use crate::error::MoveError;

/// Top of a foundation stack as shown on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoundationTop {
    Card(Card),
    /// Nothing placed yet; displays as the suit's letter.
    Empty(Suit),
}

impl fmt::Display for FoundationTop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoundationTop::Card(card) => write!(f, "{card}"),
            FoundationTop::Empty(suit) => write!(f, "{}", suit.letter()),
        }
    }
}

/// One ascending stack per suit, Ace to King.
///
/// Append-only: nothing ever leaves the foundation during a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Foundation {
    stacks: [Vec<Card>; 4],
}

impl Foundation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards placed on `suit`'s stack, Ace first.
    #[must_use]
    pub fn stack(&self, suit: Suit) -> &[Card] {
        &self.stacks[suit.index()]
    }

    #[must_use]
    pub fn top_card(&self, suit: Suit) -> Option<&Card> {
        self.stacks[suit.index()].last()
    }

    #[must_use]
    pub fn top(&self, suit: Suit) -> FoundationTop {
        match self.top_card(suit) {
            Some(card) => FoundationTop::Card(*card),
            None => FoundationTop::Empty(suit),
        }
    }

    /// True if `card` is the next card its suit's stack needs.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        match self.top_card(card.suit()) {
            Some(top) => top.is_below(card),
            None => card.rank() == Rank::ACE,
        }
    }

    /// Place `card` on its suit's stack.
    pub fn add_card(&mut self, mut card: Card) -> Result<(), MoveError> {
        if !self.accepts(&card) {
            return Err(MoveError::FoundationRejects(card));
        }
        card.set_face_up(true);
        self.stacks[card.suit().index()].push(card);
        Ok(())
    }

    /// Cards on all four stacks.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// True once every stack is topped by a King.
    #[must_use]
    pub fn game_won(&self) -> bool {
        self.stacks
            .iter()
            .all(|stack| stack.last().is_some_and(Card::is_king))
    }
}
