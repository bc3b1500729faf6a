//! Transaction model
//!
//! A single dated ledger entry. Transactions are immutable once recorded:
//! the ledger only ever appends them.

use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::LedgerError;

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Interpret a stored type field
    ///
    /// Older ledger files hold free text here and everything that is not
    /// exactly "Income" counts as an expense. Returns the kind and whether
    /// the value was recognised.
    pub fn from_stored(s: &str) -> (Self, bool) {
        match s {
            "Income" => (Self::Income, true),
            "Expense" => (Self::Expense, true),
            _ => (Self::Expense, false),
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "i" => Ok(Self::Income),
            "expense" | "e" => Ok(Self::Expense),
            other => Err(LedgerError::Validation(format!(
                "Unknown transaction type '{}' (expected Income or Expense)",
                other
            ))),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction date, expected as YYYY-MM-DD
    pub date: String,

    pub kind: TransactionKind,

    /// Free-text category, used as the grouping key in reports
    pub category: String,

    pub amount: Money,

    pub note: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: impl Into<String>,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            kind,
            category: category.into(),
            amount,
            note: note.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// The first seven characters of the date (YYYY-MM)
    ///
    /// Dates shorter than that are returned whole.
    pub fn month_key(&self) -> &str {
        match self.date.char_indices().nth(7) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }

    /// Check whether this transaction falls in the given YYYY-MM month
    pub fn in_month(&self, key: &str) -> bool {
        self.month_key() == key
    }
}
