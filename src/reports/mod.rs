//! Reports module for ledger-cli
//!
//! Provides the read-only views over the ledger: the full register, the
//! income/expense summary with budget alerts, and the month filter.

pub mod month;
pub mod register;
pub mod summary;

pub use month::{MonthReport, NO_TRANSACTIONS};
pub use register::RegisterReport;
pub use summary::{CategoryRow, SummaryReport};

use crate::error::LedgerResult;
use crate::models::{BudgetLimits, Transaction};

/// Builds reports over a ledger snapshot using a fixed budget table
///
/// Every report is recomputed from scratch on each call.
#[derive(Debug, Clone, Default)]
pub struct ReportEngine {
    budget: BudgetLimits,
}

impl ReportEngine {
    pub fn new(budget: BudgetLimits) -> Self {
        Self { budget }
    }

    /// All transactions in insertion order
    pub fn list(&self, transactions: &[Transaction]) -> RegisterReport {
        RegisterReport::generate(transactions)
    }

    /// Totals and per-category expense with budget alerts
    pub fn summary(&self, transactions: &[Transaction]) -> LedgerResult<SummaryReport> {
        SummaryReport::generate(transactions, &self.budget)
    }

    /// Transactions in the given `YYYY-MM` month
    pub fn filter_month(&self, transactions: &[Transaction], month: &str) -> MonthReport {
        MonthReport::generate(transactions, month)
    }
}
