//! Greedy fixed-priority strategy.
//!
//! Each decision cycle scans the rules in their configured order and plays
//! the first move any rule finds. There is no lookahead or backtracking;
//! the same position and configuration always produce the same move.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::error::ConfigError;
use crate::game::{Game, Move};

use super::rule::{ColumnOrder, Rule, RuleOrder};
use super::{Decision, Policy};

/// Rule order plus column scan order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    rules: RuleOrder,
    columns: ColumnOrder,
}

impl Strategy {
    #[must_use]
    pub fn new(rules: RuleOrder, columns: ColumnOrder) -> Self {
        Self { rules, columns }
    }

    /// Build from raw ids, e.g. `(&[2, 1, 3, 4, 5], &[0, 1, 2, 3, 4, 5, 6])`.
    pub fn from_ids(rule_ids: &[u8], column_indices: &[usize]) -> Result<Self, ConfigError> {
        Ok(Self::new(RuleOrder::new(rule_ids)?, ColumnOrder::new(column_indices)?))
    }

    #[must_use]
    pub fn rule_order(&self) -> &RuleOrder {
        &self.rules
    }

    #[must_use]
    pub fn column_order(&self) -> &ColumnOrder {
        &self.columns
    }

    /// Rules in priority order.
    pub fn ordered_rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.rules.rules().iter().copied()
    }

    /// Play the first move found by any rule, in priority order.
    pub fn step(&self, game: &mut Game) -> Option<Rule> {
        for rule in self.ordered_rules() {
            if self.apply(rule, game) {
                log::trace!("rule {rule} played {:?}", game.history().last().map(|r| r.mv));
                return Some(rule);
            }
        }
        None
    }

    /// Run one rule. Returns whether it played a move.
    pub fn apply(&self, rule: Rule, game: &mut Game) -> bool {
        match rule {
            Rule::TableauToFoundation => self.tableau_to_foundation(game),
            Rule::WasteToFoundation => game.take_turn(Move::WasteToFoundation),
            Rule::FillOpenWithKing => self.fill_open_with_king(game),
            Rule::WasteToTableau => self.waste_to_tableau(game),
            Rule::ExposeHidden => self.expose_hidden(game),
        }
    }

    fn tableau_to_foundation(&self, game: &mut Game) -> bool {
        for &src in self.columns.columns() {
            if !game.tableau().column(src).is_empty()
                && game.take_turn(Move::TableauToFoundation { src })
            {
                return true;
            }
        }
        false
    }

    fn fill_open_with_king(&self, game: &mut Game) -> bool {
        for &dst in self.columns.columns() {
            if !game.tableau().column(dst).is_empty() {
                continue;
            }

            // Only take a King off cards it is hiding; moving a King from
            // one otherwise empty column to another gains nothing.
            for &src in self.columns.columns() {
                let source = game.tableau().column(src);
                let movable = src != dst
                    && source.has_hidden()
                    && source.base().is_some_and(Card::is_king);
                if movable && game.take_turn(Move::TableauToTableau { src, dst }) {
                    return true;
                }
            }

            if game.stock_waste().waste_top().is_some()
                && game.take_turn(Move::WasteToTableau { dst })
            {
                return true;
            }
        }
        false
    }

    fn waste_to_tableau(&self, game: &mut Game) -> bool {
        if game.stock_waste().waste_top().is_none() {
            return false;
        }
        for &dst in self.columns.columns() {
            if !game.tableau().column(dst).is_empty()
                && game.take_turn(Move::WasteToTableau { dst })
            {
                return true;
            }
        }
        false
    }

    /// Only the receiving top and the source's bottom-most exposed card are
    /// compared, so a match always moves the source's whole exposed run.
    /// A source with nothing hidden is moved too, leaving its column empty.
    fn expose_hidden(&self, game: &mut Game) -> bool {
        for &src in self.columns.columns() {
            let source = game.tableau().column(src);
            let Some(&base) = source.base() else {
                continue;
            };
            for &dst in self.columns.columns() {
                let fits = src != dst
                    && game
                        .tableau()
                        .column(dst)
                        .top()
                        .is_some_and(|top| top.can_attach(&base));
                if fits && game.take_turn(Move::TableauToTableau { src, dst }) {
                    return true;
                }
            }
        }
        false
    }
}

impl Policy for Strategy {
    /// One decision cycle: draw if the waste is empty, otherwise try the
    /// rules, otherwise draw anyway.
    fn decide(&self, game: &mut Game) -> Decision {
        if game.stock_waste().waste_top().is_none() && game.take_turn(Move::Draw) {
            return Decision::Drew;
        }
        if let Some(rule) = self.step(game) {
            return Decision::Applied(rule);
        }
        if game.take_turn(Move::Draw) {
            Decision::ForcedDraw
        } else {
            Decision::Stuck
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::zones::{Column, Foundation, StockWaste, Tableau, TableauColumn, COLUMN_COUNT};

    fn cards(list: &[&str]) -> Vec<Card> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn col(index: usize) -> Column {
        Column::new(index).unwrap()
    }

    fn game_with(columns: Vec<(usize, TableauColumn)>, waste: &[&str]) -> Game {
        let mut all: [TableauColumn; COLUMN_COUNT] = Default::default();
        for (index, column) in columns {
            all[index] = column;
        }
        Game::from_zones(
            GameConfig::default(),
            Tableau::from_columns(all),
            Foundation::new(),
            StockWaste::with_piles(cards(&["9c"]), cards(waste)),
        )
    }

    #[test]
    fn test_ordered_rules_follow_configuration() {
        let strategy = Strategy::from_ids(&[5, 3, 1, 4, 2], &[0, 1, 2, 3, 4, 5, 6]).unwrap();
        let rules: Vec<_> = strategy.ordered_rules().collect();
        assert_eq!(
            rules,
            vec![
                Rule::ExposeHidden,
                Rule::FillOpenWithKing,
                Rule::TableauToFoundation,
                Rule::WasteToTableau,
                Rule::WasteToFoundation,
            ]
        );
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(Strategy::from_ids(&[1, 2, 3, 4], &[0, 1, 2, 3, 4, 5, 6]).is_err());
        assert!(Strategy::from_ids(&[1, 2, 3, 4, 5], &[0, 1, 2, 3, 4, 5, 5]).is_err());
    }

    #[test]
    fn test_tableau_to_foundation_respects_column_order() {
        let columns = vec![
            (1, TableauColumn::new(vec![], cards(&["Ah"]))),
            (4, TableauColumn::new(vec![], cards(&["As"]))),
        ];
        let mut game = game_with(columns.clone(), &["3d"]);
        let reversed = Strategy::new(RuleOrder::default(), ColumnOrder::reversed());
        assert!(reversed.apply(Rule::TableauToFoundation, &mut game));
        assert_eq!(game.commands(), vec!["tf5"]);

        let mut game = game_with(columns, &["3d"]);
        assert!(Strategy::default().apply(Rule::TableauToFoundation, &mut game));
        assert_eq!(game.commands(), vec!["tf2"]);
    }

    #[test]
    fn test_fill_open_with_king_prefers_tableau_king() {
        let mut game = game_with(
            vec![
                (0, TableauColumn::new(cards(&["2c"]), cards(&["Kh", "Qs"]))),
                (1, TableauColumn::new(vec![], cards(&["5d"]))),
            ],
            &["Kc"],
        );

        assert!(Strategy::default().apply(Rule::FillOpenWithKing, &mut game));
        assert_eq!(game.commands(), vec!["tt13"]);
        assert_eq!(game.tableau().column(col(2)).exposed(), &cards(&["Kh", "Qs"])[..]);
        assert_eq!(game.tableau().column(col(0)).exposed(), &cards(&["2c"])[..]);
    }

    #[test]
    fn test_fill_open_with_king_skips_bare_king() {
        let mut game = game_with(
            vec![
                (0, TableauColumn::new(vec![], cards(&["Kh"]))),
                (1, TableauColumn::new(vec![], cards(&["5d"]))),
            ],
            &["Kc"],
        );

        // The bare King stays put; the waste King fills the first gap.
        assert!(Strategy::default().apply(Rule::FillOpenWithKing, &mut game));
        assert_eq!(game.commands(), vec!["wt3"]);
    }

    #[test]
    fn test_fill_open_with_king_declines_without_kings() {
        let mut game = game_with(vec![(0, TableauColumn::new(cards(&["2c"]), cards(&["Qs"])))], &["3d"]);
        assert!(!Strategy::default().apply(Rule::FillOpenWithKing, &mut game));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_waste_to_tableau_ignores_empty_columns() {
        let mut game = game_with(
            vec![
                (3, TableauColumn::new(vec![], cards(&["9h"]))),
                (5, TableauColumn::new(vec![], cards(&["9d"]))),
            ],
            &["8s"],
        );

        assert!(Strategy::default().apply(Rule::WasteToTableau, &mut game));
        assert_eq!(game.commands(), vec!["wt4"]);
        assert!(!Strategy::default().apply(Rule::WasteToTableau, &mut game));
    }

    #[test]
    fn test_expose_hidden_moves_whole_run() {
        let mut game = game_with(
            vec![
                (0, TableauColumn::new(cards(&["3c"]), cards(&["8h", "7s"]))),
                (2, TableauColumn::new(vec![], cards(&["9c"]))),
            ],
            &["Kd"],
        );

        assert!(Strategy::default().apply(Rule::ExposeHidden, &mut game));
        assert_eq!(game.commands(), vec!["tt13"]);
        assert_eq!(game.tableau().column(col(0)).exposed(), &cards(&["3c"])[..]);
        assert_eq!(game.tableau().column(col(2)).exposed(), &cards(&["9c", "8h", "7s"])[..]);
    }

    #[test]
    fn test_expose_hidden_ignores_partial_runs() {
        // 7s could move onto 8d, but that would not reveal anything.
        let mut game = game_with(
            vec![
                (0, TableauColumn::new(cards(&["3c"]), cards(&["8h", "7s"]))),
                (2, TableauColumn::new(vec![], cards(&["8d"]))),
            ],
            &["Kd"],
        );

        assert!(!Strategy::default().apply(Rule::ExposeHidden, &mut game));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_expose_hidden_moves_run_without_hidden_cards() {
        let mut game = game_with(
            vec![
                (0, TableauColumn::new(vec![], cards(&["8h"]))),
                (2, TableauColumn::new(vec![], cards(&["9c"]))),
            ],
            &["Kd"],
        );

        assert!(Strategy::default().apply(Rule::ExposeHidden, &mut game));
        assert_eq!(game.commands(), vec!["tt13"]);
        assert!(game.tableau().column(col(0)).is_empty());
        assert_eq!(game.tableau().column(col(2)).exposed(), &cards(&["9c", "8h"])[..]);
    }

    #[test]
    fn test_step_returns_first_successful_rule() {
        let mut game = game_with(
            vec![
                (0, TableauColumn::new(vec![], cards(&["Ah"]))),
                (1, TableauColumn::new(vec![], cards(&["2s"]))),
            ],
            &["Ad"],
        );

        let waste_first = Strategy::from_ids(&[2, 1, 3, 4, 5], &[0, 1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(waste_first.step(&mut game), Some(Rule::WasteToFoundation));
        assert_eq!(Strategy::default().step(&mut game), Some(Rule::TableauToFoundation));
        assert_eq!(game.commands(), vec!["wf", "tf1"]);
    }

    #[test]
    fn test_decide_draws_when_waste_empty() {
        let mut game = game_with(vec![(0, TableauColumn::new(vec![], cards(&["Ah"])))], &[]);

        assert_eq!(Strategy::default().decide(&mut game), Decision::Drew);
        assert_eq!(Strategy::default().decide(&mut game), Decision::Applied(Rule::TableauToFoundation));
    }

    #[test]
    fn test_decide_forced_draw_and_stuck() {
        let mut game = game_with(vec![(0, TableauColumn::new(vec![], cards(&["5h"])))], &["3d"]);
        // 9c is still in the stock, so the fallback draw succeeds.
        assert_eq!(Strategy::default().decide(&mut game), Decision::ForcedDraw);

        let mut empty = Game::from_zones(
            GameConfig::default(),
            Tableau::default(),
            Foundation::new(),
            StockWaste::default(),
        );
        assert_eq!(Strategy::default().decide(&mut empty), Decision::Stuck);
    }
}
