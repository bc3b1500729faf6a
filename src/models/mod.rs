//! Core data models for ledger-cli
//!
//! This module contains the data structures that represent the ledger
//! domain: money amounts, transactions, and category budget limits.

pub mod budget;
pub mod money;
pub mod transaction;

pub use budget::BudgetLimits;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
