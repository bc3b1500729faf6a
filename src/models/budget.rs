//! Category budget limits
//!
//! A fixed mapping from category name to a monthly spending limit. Built once
//! (from settings or the defaults) and handed to the report engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::money::Money;

/// Categories and limits used when the settings file does not override them
const DEFAULT_LIMITS: &[(&str, i64)] = &[
    ("Food", 2000),
    ("Transport", 1500),
    ("Rent", 8000),
    ("Shopping", 3000),
    ("Other", 1000),
];

/// Immutable category -> monthly limit table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetLimits(BTreeMap<String, Money>);

impl BudgetLimits {
    /// Create a table from category/limit pairs
    pub fn new<I, S>(limits: I) -> Self
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        Self(limits.into_iter().map(|(c, m)| (c.into(), m)).collect())
    }

    /// A table with no limits, so no category ever triggers an alert
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// The limit for a category, if it has one
    pub fn limit_for(&self, category: &str) -> Option<Money> {
        self.0.get(category).copied()
    }

    /// Spending strictly above the limit exceeds it. Categories without a
    /// limit never do.
    pub fn is_exceeded(&self, category: &str, spent: Money) -> bool {
        self.limit_for(category).is_some_and(|limit| spent > limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(c, m)| (c.as_str(), *m))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for BudgetLimits {
    fn default() -> Self {
        Self::new(
            DEFAULT_LIMITS
                .iter()
                .map(|&(category, units)| (category, Money::from_units_cents(units, 0))),
        )
    }
}
