//! Register Report
//!
//! The full ledger in insertion order.

use crate::display::{format_section, format_transaction_rows};
use crate::models::Transaction;

/// Every transaction, in the order it was recorded
#[derive(Debug, Clone)]
pub struct RegisterReport {
    pub rows: Vec<Transaction>,
}

impl RegisterReport {
    /// Generate the register for a ledger snapshot
    pub fn generate(transactions: &[Transaction]) -> Self {
        Self {
            rows: transactions.to_vec(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = format_section("All Transactions");
        output.push('\n');
        output.push_str(&format_transaction_rows(&self.rows, symbol));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};

    #[test]
    fn test_register_keeps_insertion_order() {
        let txns = vec![
            Transaction::new("2024-02-01", TransactionKind::Expense, "Food", Money::from_cents(100), "b"),
            Transaction::new("2024-01-01", TransactionKind::Income, "Salary", Money::from_cents(900), "a"),
        ];
        let report = RegisterReport::generate(&txns);
        assert_eq!(report.rows, txns);

        let text = report.format_terminal("₹");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "--- All Transactions ---",
                "2024-02-01 | Expense | Food | ₹1.00 | b",
                "2024-01-01 | Income | Salary | ₹9.00 | a",
            ]
        );
    }

    #[test]
    fn test_empty_register_has_no_rows() {
        let report = RegisterReport::generate(&[]);
        assert!(report.rows.is_empty());
        assert_eq!(report.format_terminal("₹"), "--- All Transactions ---\n");
    }
}
