//! Heuristic rules and the orders they are scanned in.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::zones::{Column, COLUMN_COUNT};

/// Number of built-in rules.
pub const RULE_COUNT: usize = 5;

/// One built-in move heuristic. Ids 1..=5 are used in rule orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Play a column's top card to the foundation.
    TableauToFoundation = 1,
    /// Play the waste top to the foundation.
    WasteToFoundation = 2,
    /// Move a King (from a column with hidden cards, or the waste) into an
    /// empty column.
    FillOpenWithKing = 3,
    /// Play the waste top onto a non-empty column.
    WasteToTableau = 4,
    /// Move a column's whole exposed run onto another column's top.
    ExposeHidden = 5,
}

impl Rule {
    /// All rules in id order.
    pub const ALL: [Rule; RULE_COUNT] = [
        Rule::TableauToFoundation,
        Rule::WasteToFoundation,
        Rule::FillOpenWithKing,
        Rule::WasteToTableau,
        Rule::ExposeHidden,
    ];

    pub fn from_id(id: u8) -> Result<Self, ConfigError> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.id() == id)
            .ok_or(ConfigError::UnknownRule(id))
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rule::TableauToFoundation => "tableau-to-foundation",
            Rule::WasteToFoundation => "waste-to-foundation",
            Rule::FillOpenWithKing => "fill-open-with-king",
            Rule::WasteToTableau => "waste-to-tableau",
            Rule::ExposeHidden => "expose-hidden",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Priority order of the five rules; always a full permutation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct RuleOrder([Rule; RULE_COUNT]);

impl RuleOrder {
    /// Build from rule ids, e.g. `&[2, 1, 3, 4, 5]`.
    pub fn new(ids: &[u8]) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::RuleOrder(ids.to_vec());
        if ids.len() != RULE_COUNT {
            return Err(invalid());
        }
        let unique: FxHashSet<u8> = ids.iter().copied().collect();
        if unique.len() != RULE_COUNT {
            return Err(invalid());
        }

        let mut rules = Rule::ALL;
        for (slot, &id) in rules.iter_mut().zip(ids) {
            *slot = Rule::from_id(id)?;
        }
        Ok(Self(rules))
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule; RULE_COUNT] {
        &self.0
    }

    #[must_use]
    pub fn ids(&self) -> Vec<u8> {
        self.0.iter().map(|rule| rule.id()).collect()
    }

    /// Every possible order (120), lexicographic by id.
    #[must_use]
    pub fn all_permutations() -> Vec<RuleOrder> {
        fn extend(prefix: &mut Vec<Rule>, out: &mut Vec<RuleOrder>) {
            if prefix.len() == RULE_COUNT {
                let mut rules = Rule::ALL;
                rules.copy_from_slice(prefix);
                out.push(RuleOrder(rules));
                return;
            }
            for rule in Rule::ALL {
                if !prefix.contains(&rule) {
                    prefix.push(rule);
                    extend(prefix, out);
                    prefix.pop();
                }
            }
        }

        let mut out = Vec::with_capacity(120);
        extend(&mut Vec::with_capacity(RULE_COUNT), &mut out);
        out
    }
}

impl Default for RuleOrder {
    fn default() -> Self {
        Self(Rule::ALL)
    }
}

impl fmt::Display for RuleOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|rule| write!(f, "{}", rule.id()))
    }
}

impl FromStr for RuleOrder {
    type Err = ConfigError;

    /// Parse a digit string such as `"21345"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ids: Vec<u8> = s
            .trim()
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8).unwrap_or(u8::MAX))
            .collect();
        RuleOrder::new(&ids)
    }
}

impl TryFrom<Vec<u8>> for RuleOrder {
    type Error = ConfigError;

    fn try_from(ids: Vec<u8>) -> Result<Self, Self::Error> {
        RuleOrder::new(&ids)
    }
}

impl From<RuleOrder> for Vec<u8> {
    fn from(order: RuleOrder) -> Self {
        order.ids()
    }
}

/// Column scan order used inside every rule; always a full permutation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct ColumnOrder([Column; COLUMN_COUNT]);

impl ColumnOrder {
    /// Build from 0-based column indices, e.g. `&[6, 5, 4, 3, 2, 1, 0]`.
    pub fn new(indices: &[usize]) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::ColumnOrder(indices.to_vec());
        if indices.len() != COLUMN_COUNT {
            return Err(invalid());
        }
        let unique: FxHashSet<usize> = indices.iter().copied().collect();
        if unique.len() != COLUMN_COUNT {
            return Err(invalid());
        }

        let mut columns = Column::ALL;
        for (slot, &index) in columns.iter_mut().zip(indices) {
            *slot = Column::new(index).ok_or_else(invalid)?;
        }
        Ok(Self(columns))
    }

    #[must_use]
    pub fn columns(&self) -> &[Column; COLUMN_COUNT] {
        &self.0
    }

    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|column| column.index()).collect()
    }

    /// Right-to-left scan.
    #[must_use]
    pub fn reversed() -> Self {
        let mut order = Self::default();
        order.0.reverse();
        order
    }
}

impl Default for ColumnOrder {
    fn default() -> Self {
        Self(Column::ALL)
    }
}

impl fmt::Display for ColumnOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|column| write!(f, "{}", column.index()))
    }
}

impl FromStr for ColumnOrder {
    type Err = ConfigError;

    /// Parse a 0-based digit string such as `"6543210"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let indices: Vec<usize> = s
            .trim()
            .chars()
            .map(|c| c.to_digit(10).map_or(usize::MAX, |d| d as usize))
            .collect();
        ColumnOrder::new(&indices)
    }
}

impl TryFrom<Vec<usize>> for ColumnOrder {
    type Error = ConfigError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        ColumnOrder::new(&indices)
    }
}

impl From<ColumnOrder> for Vec<usize> {
    fn from(order: ColumnOrder) -> Self {
        order.indices()
    }
}
