//! Stock (draw pile) and waste (discard pile).

use crate::cards::Card;
use crate::error::MoveError;

/// Draw pile and discard pile. The top of each is the end of its sequence.
///
/// Cards never enter or leave except through the waste top, so
/// `stock_len() + waste_len()` only changes when a waste card is played.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StockWaste {
    stock: Vec<Card>,
    waste: Vec<Card>,
}

impl StockWaste {
    /// Start with every card in the stock, last card on top.
    #[must_use]
    pub fn new(stock: Vec<Card>) -> Self {
        Self::with_piles(stock, Vec::new())
    }

    /// Build from explicit piles.
    #[must_use]
    pub fn with_piles(mut stock: Vec<Card>, mut waste: Vec<Card>) -> Self {
        stock.iter_mut().for_each(|card| card.set_face_up(false));
        waste.iter_mut().for_each(|card| card.set_face_up(true));
        Self { stock, waste }
    }

    /// Turn the stock's top card onto the waste.
    ///
    /// An empty stock is first refilled from the waste in reverse order;
    /// there is no limit on the number of passes.
    pub fn stock_to_waste(&mut self) -> Result<Card, MoveError> {
        if self.stock.is_empty() {
            if self.waste.is_empty() {
                return Err(MoveError::StockExhausted);
            }
            self.recycle();
        }

        let mut card = self.stock.pop().ok_or(MoveError::StockExhausted)?;
        card.set_face_up(true);
        self.waste.push(card);
        Ok(card)
    }

    fn recycle(&mut self) {
        self.stock = std::mem::take(&mut self.waste);
        self.stock.reverse();
        self.stock.iter_mut().for_each(|card| card.set_face_up(false));
    }

    /// Remove the waste top. Callers validate the destination first.
    pub fn pop_waste_card(&mut self) -> Option<Card> {
        self.waste.pop()
    }

    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    /// Cards in both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stock.len() + self.waste.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `"N card(s)"`, or `"empty"`.
    #[must_use]
    pub fn stock_label(&self) -> String {
        if self.stock.is_empty() {
            "empty".to_string()
        } else {
            format!("{} card(s)", self.stock.len())
        }
    }
}
