//! A single game of Klondike: the three zones plus scoring and history.
//!
//! `Game::take_turn` is the only way to change the zones after the deal.
//! Every successful move bumps the move counter, adds its score and is
//! appended to the audit trail; a failed move changes nothing.

use std::fmt;
use std::time::Instant;

use crate::cards::{Deck, Suit};
use crate::core::{GameConfig, GameRng};
use crate::error::{ConfigError, MoveError};
use crate::zones::{Foundation, StockWaste, Tableau, COLUMN_COUNT};

use super::events::GameEvent;
use super::metrics::GameMetrics;
use super::moves::{Move, MoveRecord};

const BREAK_LINE: &str = "-------------------------------------------------------------------";

/// One game from deal to final metrics.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    tableau: Tableau,
    foundation: Foundation,
    stock_waste: StockWaste,
    moves: u32,
    score: u32,
    started: Instant,
    finished: Option<Instant>,
    history: Vec<MoveRecord>,
    events: Vec<GameEvent>,
}

impl Game {
    /// Shuffle with `seed` and deal a new game.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let deck = Deck::new(config.deck_count, &mut GameRng::new(seed));
        Ok(Self::deal(config, deck))
    }

    /// Deal from a prepared deck.
    ///
    /// Column i receives `i + 1` cards, the last of which is exposed; every
    /// remaining card goes to the stock. The deck is consumed.
    #[must_use]
    pub fn deal(config: GameConfig, mut deck: Deck) -> Self {
        let piles: Vec<_> = (1..=COLUMN_COUNT)
            .map(|n| deck.deal_cards(n.min(deck.len())).unwrap_or_default())
            .collect();
        let tableau = Tableau::deal(piles);
        let stock = deck.deal_cards(deck.len()).unwrap_or_default();

        Self::from_zones(config, tableau, Foundation::new(), StockWaste::new(stock))
    }

    /// Start a game from an arbitrary position.
    #[must_use]
    pub fn from_zones(
        config: GameConfig,
        tableau: Tableau,
        foundation: Foundation,
        stock_waste: StockWaste,
    ) -> Self {
        Self {
            config,
            tableau,
            foundation,
            stock_waste,
            moves: 0,
            score: 0,
            started: Instant::now(),
            finished: None,
            history: Vec::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    #[must_use]
    pub fn foundation(&self) -> &Foundation {
        &self.foundation
    }

    #[must_use]
    pub fn stock_waste(&self) -> &StockWaste {
        &self.stock_waste
    }

    /// Successful moves so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Audit trail of successful moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The audit trail as command strings (`"mv"`, `"tt13"`, ...).
    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        self.history.iter().map(|record| record.mv.to_string()).collect()
    }

    /// Diagnostic events; empty unless diagnostics are enabled.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Cards in all zones; constant for the life of a game.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.tableau.card_count() + self.foundation.card_count() + self.stock_waste.len()
    }

    /// True once every foundation stack is complete.
    #[must_use]
    pub fn game_won(&self) -> bool {
        self.foundation.game_won()
    }

    /// Play one move. Returns whether it was applied.
    pub fn take_turn(&mut self, mv: Move) -> bool {
        self.try_move(mv).is_ok()
    }

    /// Parse and play a text command such as `"tt13"`.
    ///
    /// Malformed commands are a failed turn.
    pub fn take_command(&mut self, input: &str) -> bool {
        match Move::parse(input) {
            Ok(mv) => self.take_turn(mv),
            Err(err) => {
                log::debug!("rejected command {input:?}: {err}");
                if self.config.diagnostics {
                    self.events.push(GameEvent::CommandRejected {
                        input: input.to_string(),
                        reason: err.to_string(),
                    });
                }
                false
            }
        }
    }

    /// Play one move, reporting why it failed.
    pub fn try_move(&mut self, mv: Move) -> Result<(), MoveError> {
        match self.apply(mv) {
            Ok(()) => {
                self.moves += 1;
                self.score += mv.score();
                let record = MoveRecord::new(mv, self.moves);
                log::debug!("applied {mv} (+{}, score {})", record.score, self.score);
                if self.config.diagnostics {
                    self.events.push(GameEvent::MoveApplied {
                        mv,
                        score: record.score,
                        sequence: record.sequence,
                    });
                }
                self.history.push(record);
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected {mv}: {err}");
                if self.config.diagnostics {
                    self.events.push(GameEvent::MoveRejected {
                        mv,
                        reason: err.to_string(),
                    });
                }
                Err(err)
            }
        }
    }

    fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        match mv {
            Move::Draw => self.stock_waste.stock_to_waste().map(drop),
            Move::WasteToFoundation => {
                let card = *self.stock_waste.waste_top().ok_or(MoveError::EmptyWaste)?;
                self.foundation.add_card(card)?;
                self.stock_waste.pop_waste_card();
                Ok(())
            }
            Move::WasteToTableau { dst } => self
                .tableau
                .waste_to_tableau(&mut self.stock_waste, dst)
                .map(drop),
            Move::TableauToFoundation { src } => self
                .tableau
                .tableau_to_foundation(&mut self.foundation, src)
                .map(drop),
            Move::TableauToTableau { src, dst } => {
                self.tableau.tableau_to_tableau(src, dst).map(drop)
            }
        }
    }

    /// Score, moves, duration and win flag.
    ///
    /// The end time is fixed by the first call; later calls report the
    /// same duration.
    pub fn final_metrics(&mut self) -> GameMetrics {
        let finished = *self.finished.get_or_insert_with(Instant::now);
        GameMetrics {
            score: self.score,
            moves: self.moves,
            duration: finished.duration_since(self.started).as_secs_f64(),
            won: self.game_won(),
        }
    }
}

impl fmt::Display for Game {
    /// Text rendering of the table: waste, stock and foundation tops, then
    /// the tableau with `x` for hidden cards.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BREAK_LINE}")?;
        writeln!(f, "Waste \t Stock \t\t\t\t Foundation")?;
        let waste = self
            .stock_waste
            .waste_top()
            .map_or_else(|| "empty".to_string(), ToString::to_string);
        write!(f, "{}\t{}\t", waste, self.stock_waste.stock_label())?;
        for suit in Suit::ALL {
            write!(f, "\t{}", self.foundation.top(suit))?;
        }
        writeln!(f)?;

        writeln!(f, "\nTableau\n\t1\t2\t3\t4\t5\t6\t7\n")?;
        for row in 0..self.tableau.pile_length() {
            let mut line = String::new();
            for column in self.tableau.columns() {
                let hidden = column.hidden().len();
                line.push('\t');
                if row < hidden {
                    line.push('x');
                } else if let Some(card) = column.exposed().get(row - hidden) {
                    line.push_str(&card.to_string());
                }
            }
            writeln!(f, "{line}")?;
        }
        write!(f, "\n{BREAK_LINE}")
    }
}
