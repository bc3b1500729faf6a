//! Transaction display formatting
//!
//! One line per transaction, shared by the full listing and the month filter.

use crate::models::Transaction;

/// Format a single transaction as `date | type | category | amount | note`
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        txn.date,
        txn.kind,
        txn.category,
        txn.amount.format_with_symbol(symbol),
        txn.note
    )
}

/// Format a list of transactions, one row per line
pub fn format_transaction_rows<'a, I>(transactions: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut output = String::new();
    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }
    output
}
