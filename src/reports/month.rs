//! Month Report
//!
//! Transactions whose date starts with a given `YYYY-MM` key. The match is a
//! plain prefix comparison; dates are never parsed.

use crate::display::format_transaction_rows;
use crate::models::Transaction;

/// Shown when a month has no transactions
pub const NO_TRANSACTIONS: &str = "No transactions found for this month.";

/// Transactions for one month, in ledger order
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub month: String,
    pub rows: Vec<Transaction>,
}

impl MonthReport {
    /// Select the transactions recorded in `month`
    pub fn generate(transactions: &[Transaction], month: &str) -> Self {
        let month = month.trim();
        Self {
            month: month.to_string(),
            rows: transactions
                .iter()
                .filter(|t| t.in_month(month))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = format!("Transactions for {}:\n", self.month);
        if self.is_empty() {
            output.push_str(NO_TRANSACTIONS);
            output.push('\n');
        } else {
            output.push_str(&format_transaction_rows(&self.rows, symbol));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};

    fn sample() -> Vec<Transaction> {
        ["2024-01-15", "2024-02-01", "2024-01-31"]
            .iter()
            .enumerate()
            .map(|(i, date)| {
                Transaction::new(
                    *date,
                    TransactionKind::Expense,
                    "Food",
                    Money::from_cents(100 * (i as i64 + 1)),
                    format!("n{}", i),
                )
            })
            .collect()
    }

    #[test]
    fn test_filter_selects_month_in_order() {
        let txns = sample();
        let report = MonthReport::generate(&txns, "2024-01");

        let dates: Vec<_> = report.rows.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-15", "2024-01-31"]);

        assert_eq!(
            report.format_terminal("₹"),
            "Transactions for 2024-01:\n\
             2024-01-15 | Expense | Food | ₹1.00 | n0\n\
             2024-01-31 | Expense | Food | ₹3.00 | n2\n"
        );
    }

    #[test]
    fn test_filter_no_match() {
        let report = MonthReport::generate(&sample(), "2025-01");
        assert!(report.is_empty());
        assert_eq!(
            report.format_terminal("₹"),
            format!("Transactions for 2025-01:\n{}\n", NO_TRANSACTIONS)
        );
    }

    #[test]
    fn test_filter_empty_ledger() {
        for key in ["2024-01", "", "anything"] {
            assert!(MonthReport::generate(&[], key).is_empty());
        }
    }

    #[test]
    fn test_filter_requires_exact_key() {
        assert!(MonthReport::generate(&sample(), "2024-1").is_empty());
        assert!(MonthReport::generate(&sample(), "2024").is_empty());
    }
}
