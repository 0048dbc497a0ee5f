//! The seven tableau columns.
//!
//! Each column is a hidden (face-down) pile with an exposed (face-up) pile
//! on top of it. Only exposed cards move. Whenever a move empties the
//! exposed pile, the next hidden card is turned up automatically.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::error::{ConfigError, MoveError};

use super::foundation::Foundation;
use super::stock_waste::StockWaste;

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 7;

/// A tableau column index, always in range.
///
/// Stored 0-based; displayed and parsed 1-based, as in the `wt3` / `tt12`
/// command notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Column(u8);

impl Column {
    /// All columns, left to right.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column(0),
        Column(1),
        Column(2),
        Column(3),
        Column(4),
        Column(5),
        Column(6),
    ];

    /// Create a column from a 0-based index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < COLUMN_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Parse a 1-based command digit (`'1'..='7'`).
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let value = digit.to_digit(10)? as usize;
        value.checked_sub(1).and_then(Self::new)
    }

    /// 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = Column> {
        Self::ALL.into_iter()
    }
}

impl TryFrom<u8> for Column {
    type Error = ConfigError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(usize::from(index)).ok_or(ConfigError::ColumnIndex(index))
    }
}

impl From<Column> for u8 {
    fn from(column: Column) -> Self {
        column.0
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// One tableau column.
///
/// Both piles are ordered bottom to top; the column's top card is the last
/// exposed card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableauColumn {
    hidden: Vec<Card>,
    exposed: Vec<Card>,
}

impl TableauColumn {
    /// Build a column from explicit piles.
    ///
    /// Exposed content is taken as-is; run legality is only checked when
    /// cards are added later.
    #[must_use]
    pub fn new(hidden: Vec<Card>, exposed: Vec<Card>) -> Self {
        let mut column = Self { hidden, exposed };
        for card in &mut column.hidden {
            card.set_face_up(false);
        }
        for card in &mut column.exposed {
            card.set_face_up(true);
        }
        column
    }

    #[must_use]
    pub fn hidden(&self) -> &[Card] {
        &self.hidden
    }

    #[must_use]
    pub fn exposed(&self) -> &[Card] {
        &self.exposed
    }

    /// The movable top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.exposed.last()
    }

    /// The bottom-most exposed card, the head of the longest run.
    #[must_use]
    pub fn base(&self) -> Option<&Card> {
        self.exposed.first()
    }

    /// True if no card is exposed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exposed.is_empty()
    }

    #[must_use]
    pub fn has_hidden(&self) -> bool {
        !self.hidden.is_empty()
    }

    /// Total hidden and exposed cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hidden.len() + self.exposed.len()
    }

    /// True if `card` may start a run placed on this column.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        match self.top() {
            Some(top) => top.can_attach(card),
            None => card.is_king(),
        }
    }

    fn turn_up_hidden(&mut self) {
        if let Some(mut card) = self.hidden.pop() {
            card.set_face_up(true);
            self.exposed.push(card);
        }
    }
}

/// The seven columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tableau {
    columns: [TableauColumn; COLUMN_COUNT],
}

impl Tableau {
    /// Lay out dealt piles, one per column.
    ///
    /// The last card of each pile becomes the exposed card, the rest stay
    /// hidden. Missing piles leave their columns empty.
    #[must_use]
    pub fn deal(piles: impl IntoIterator<Item = Vec<Card>>) -> Self {
        let mut tableau = Self::default();
        for (column, mut pile) in tableau.columns.iter_mut().zip(piles) {
            let exposed: Vec<Card> = pile.pop().into_iter().collect();
            *column = TableauColumn::new(pile, exposed);
        }
        tableau
    }

    /// Build a tableau from explicit columns.
    #[must_use]
    pub fn from_columns(columns: [TableauColumn; COLUMN_COUNT]) -> Self {
        Self { columns }
    }

    #[must_use]
    pub fn column(&self, column: Column) -> &TableauColumn {
        &self.columns[column.index()]
    }

    #[must_use]
    pub fn columns(&self) -> &[TableauColumn; COLUMN_COUNT] {
        &self.columns
    }

    /// Cards currently on the tableau.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(TableauColumn::len).sum()
    }

    /// Height of the tallest column, hidden cards included.
    #[must_use]
    pub fn pile_length(&self) -> usize {
        self.columns.iter().map(TableauColumn::len).max().unwrap_or(0)
    }

    /// Append a run to `column`'s exposed pile.
    ///
    /// Only a King may start an empty column; otherwise the column's top
    /// card must accept the run's first card. Nothing is appended on
    /// failure.
    pub fn add_cards(&mut self, cards: &[Card], column: Column) -> Result<(), MoveError> {
        let first = cards.first().ok_or(MoveError::EmptyRun)?;
        let target = &mut self.columns[column.index()];
        if !target.accepts(first) {
            return Err(MoveError::TableauRejects { card: *first, column });
        }
        target.exposed.extend(cards.iter().map(|card| {
            let mut card = *card;
            card.set_face_up(true);
            card
        }));
        Ok(())
    }

    /// Move the longest placeable exposed run from `src` onto `dst`.
    ///
    /// Start indices are tried from the bottom of the exposed pile upward,
    /// so the largest legal run wins. Returns the number of cards moved.
    pub fn tableau_to_tableau(&mut self, src: Column, dst: Column) -> Result<usize, MoveError> {
        if src == dst {
            return Err(MoveError::SameColumn(src));
        }
        let source = &self.columns[src.index()];
        if source.is_empty() {
            return Err(MoveError::EmptyColumn(src));
        }

        let target = &self.columns[dst.index()];
        let start = source
            .exposed
            .iter()
            .position(|card| target.accepts(card))
            .ok_or(MoveError::NoMovableRun { src, dst })?;

        let run: SmallVec<[Card; 13]> = self.columns[src.index()].exposed.drain(start..).collect();
        let moved = run.len();
        self.columns[dst.index()].exposed.extend(run);

        if start == 0 {
            self.columns[src.index()].turn_up_hidden();
        }
        Ok(moved)
    }

    /// Move the top card of `column` onto its foundation stack.
    pub fn tableau_to_foundation(
        &mut self,
        foundation: &mut Foundation,
        column: Column,
    ) -> Result<Card, MoveError> {
        let source = &mut self.columns[column.index()];
        let card = *source.top().ok_or(MoveError::EmptyColumn(column))?;
        foundation.add_card(card)?;

        source.exposed.pop();
        if source.exposed.is_empty() {
            source.turn_up_hidden();
        }
        Ok(card)
    }

    /// Move the waste's top card onto `column`.
    pub fn waste_to_tableau(
        &mut self,
        stock_waste: &mut StockWaste,
        column: Column,
    ) -> Result<Card, MoveError> {
        let card = *stock_waste.waste_top().ok_or(MoveError::EmptyWaste)?;
        self.add_cards(&[card], column)?;
        stock_waste.pop_waste_card();
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn cards(list: &[&str]) -> Vec<Card> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn col(index: usize) -> Column {
        Column::new(index).unwrap()
    }

    fn tableau_with(columns: Vec<(usize, TableauColumn)>) -> Tableau {
        let mut all: [TableauColumn; COLUMN_COUNT] = Default::default();
        for (index, column) in columns {
            all[index] = column;
        }
        Tableau::from_columns(all)
    }

    #[test]
    fn test_column_parsing() {
        assert_eq!(Column::from_digit('1'), Column::new(0));
        assert_eq!(Column::from_digit('7'), Column::new(6));
        assert!(Column::from_digit('0').is_none());
        assert!(Column::from_digit('8').is_none());
        assert!(Column::from_digit('x').is_none());
        assert_eq!(col(2).to_string(), "3");
        assert_eq!(Column::all().count(), 7);
    }

    #[test]
    fn test_column_deserialize_checks_range() {
        assert_eq!(serde_json::from_str::<Column>("6").unwrap(), col(6));
        assert_eq!(serde_json::to_string(&col(6)).unwrap(), "6");
        assert!(serde_json::from_str::<Column>("7").is_err());
        assert!(serde_json::from_str::<Column>("255").is_err());
        assert_eq!(Column::try_from(9), Err(ConfigError::ColumnIndex(9)));
    }

    #[test]
    fn test_deal_layout() {
        let piles: Vec<Vec<Card>> = (1..=7)
            .map(|n| (0..n).map(|_| "2c".parse().unwrap()).collect())
            .collect();
        let tableau = Tableau::deal(piles);

        for (i, column) in tableau.columns().iter().enumerate() {
            assert_eq!(column.hidden().len(), i);
            assert_eq!(column.exposed().len(), 1);
            assert!(column.top().unwrap().is_face_up());
        }
        assert_eq!(tableau.card_count(), 28);
        assert_eq!(tableau.pile_length(), 7);
    }

    #[test]
    fn test_add_king_to_empty_column() {
        let mut tableau = Tableau::default();
        assert!(tableau.add_cards(&cards(&["Kh"]), col(0)).is_ok());
        assert_eq!(tableau.column(col(0)).exposed(), &cards(&["Kh"])[..]);
    }

    #[test]
    fn test_add_non_king_to_empty_column_fails() {
        let mut tableau = Tableau::default();
        let err = tableau.add_cards(&cards(&["Qh", "Js"]), col(0)).unwrap_err();

        assert_eq!(err, MoveError::TableauRejects { card: "Qh".parse().unwrap(), column: col(0) });
        assert!(tableau.column(col(0)).is_empty());
    }

    #[test]
    fn test_add_run_onto_matching_top() {
        let mut tableau = tableau_with(vec![(3, TableauColumn::new(vec![], cards(&["8s"])))]);

        assert!(tableau.add_cards(&cards(&["7h", "6c"]), col(3)).is_ok());
        assert_eq!(tableau.column(col(3)).exposed(), &cards(&["8s", "7h", "6c"])[..]);

        assert!(tableau.add_cards(&cards(&["5c"]), col(3)).is_err());
        assert!(tableau.add_cards(&[], col(3)).is_err());
        assert_eq!(tableau.column(col(3)).exposed().len(), 3);
    }

    #[test]
    fn test_tableau_to_tableau_moves_longest_run() {
        let mut tableau = tableau_with(vec![
            (0, TableauColumn::new(cards(&["2d"]), cards(&["9h", "8s", "7d"]))),
            (1, TableauColumn::new(vec![], cards(&["10c"]))),
        ]);

        assert_eq!(tableau.tableau_to_tableau(col(0), col(1)), Ok(3));
        assert_eq!(tableau.column(col(1)).exposed(), &cards(&["10c", "9h", "8s", "7d"])[..]);
        // Emptying the exposed pile turns up the hidden card.
        assert_eq!(tableau.column(col(0)).exposed(), &cards(&["2d"])[..]);
        assert!(!tableau.column(col(0)).has_hidden());
    }

    #[test]
    fn test_tableau_to_tableau_partial_run() {
        let mut tableau = tableau_with(vec![
            (0, TableauColumn::new(cards(&["2d"]), cards(&["9h", "8s", "7d"]))),
            (1, TableauColumn::new(vec![], cards(&["9d"]))),
        ]);

        assert_eq!(tableau.tableau_to_tableau(col(0), col(1)), Ok(2));
        assert_eq!(tableau.column(col(0)).exposed(), &cards(&["9h"])[..]);
        assert!(tableau.column(col(0)).has_hidden());
    }

    #[test]
    fn test_tableau_to_tableau_rejects_non_king_into_empty() {
        let mut tableau = tableau_with(vec![(0, TableauColumn::new(vec![], cards(&["6s", "5d"])))]);
        let before = tableau.clone();

        assert_eq!(
            tableau.tableau_to_tableau(col(0), col(2)),
            Err(MoveError::NoMovableRun { src: col(0), dst: col(2) })
        );
        assert_eq!(tableau, before);
    }

    #[test]
    fn test_tableau_to_tableau_edge_cases() {
        let mut tableau = tableau_with(vec![(0, TableauColumn::new(vec![], cards(&["Ks"])))]);

        assert_eq!(tableau.tableau_to_tableau(col(0), col(0)), Err(MoveError::SameColumn(col(0))));
        assert_eq!(tableau.tableau_to_tableau(col(1), col(0)), Err(MoveError::EmptyColumn(col(1))));
        assert_eq!(tableau.tableau_to_tableau(col(0), col(1)), Ok(1));
    }

    #[test]
    fn test_tableau_to_foundation() {
        let mut foundation = Foundation::new();
        let mut tableau = tableau_with(vec![(0, TableauColumn::new(cards(&["9d"]), cards(&["Ah"])))]);

        assert_eq!(tableau.tableau_to_foundation(&mut foundation, col(0)), Ok("Ah".parse().unwrap()));
        assert_eq!(foundation.stack(Suit::Heart).len(), 1);
        assert_eq!(tableau.column(col(0)).exposed(), &cards(&["9d"])[..]);

        assert!(tableau.tableau_to_foundation(&mut foundation, col(0)).is_err());
        assert_eq!(tableau.column(col(0)).exposed().len(), 1);
        assert_eq!(tableau.tableau_to_foundation(&mut foundation, col(5)), Err(MoveError::EmptyColumn(col(5))));
    }

    #[test]
    fn test_waste_to_tableau() {
        let mut stock_waste = StockWaste::with_piles(vec![], cards(&["3c", "Kd"]));
        let mut tableau = tableau_with(vec![(1, TableauColumn::new(vec![], cards(&["4h"])))]);

        // Kd cannot go on 4h, but can start the empty first column.
        assert!(tableau.waste_to_tableau(&mut stock_waste, col(1)).is_err());
        assert_eq!(tableau.waste_to_tableau(&mut stock_waste, col(0)), Ok("Kd".parse().unwrap()));
        assert_eq!(tableau.waste_to_tableau(&mut stock_waste, col(1)), Ok("3c".parse().unwrap()));
        assert_eq!(tableau.waste_to_tableau(&mut stock_waste, col(1)), Err(MoveError::EmptyWaste));
        assert_eq!(stock_waste.waste_len(), 0);
    }
}
