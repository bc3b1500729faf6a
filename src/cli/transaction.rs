//! CLI commands for recording and listing transactions

use std::io::Write;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Money, Transaction, TransactionKind};
use crate::reports::ReportEngine;

/// Record one transaction and persist the ledger
pub fn handle_add<W: Write>(
    ledger: &mut Ledger,
    txn: Transaction,
    out: &mut W,
) -> LedgerResult<()> {
    if txn.amount.is_negative() {
        return Err(LedgerError::Validation(format!(
            "Amount cannot be negative: {}",
            txn.amount
        )));
    }
    if txn.category.trim().is_empty() {
        return Err(LedgerError::Validation("Category cannot be empty".into()));
    }
    if [&txn.date, &txn.category, &txn.note]
        .iter()
        .any(|field| field.contains(&['\n', '\r'][..]))
    {
        return Err(LedgerError::Validation(
            "Fields cannot contain line breaks".into(),
        ));
    }

    ledger.append(txn)?;
    writeln!(out, "Transaction added.")?;
    Ok(())
}

/// Build a transaction from command-line fields
pub fn transaction_from_args(
    date: String,
    kind: TransactionKind,
    category: String,
    amount: Money,
    note: String,
) -> Transaction {
    Transaction::new(date.trim(), kind, category.trim(), amount, note)
}

/// Print every transaction in insertion order
pub fn handle_list<W: Write>(
    ledger: &Ledger,
    engine: &ReportEngine,
    settings: &Settings,
    out: &mut W,
) -> LedgerResult<()> {
    let report = engine.list(ledger.transactions());
    write!(out, "{}", report.format_terminal(&settings.currency_symbol))?;
    Ok(())
}

/// Print the transactions of one `YYYY-MM` month
pub fn handle_filter<W: Write>(
    ledger: &Ledger,
    engine: &ReportEngine,
    settings: &Settings,
    month: &str,
    out: &mut W,
) -> LedgerResult<()> {
    let report = engine.filter_month(ledger.transactions(), month);
    write!(out, "{}", report.format_terminal(&settings.currency_symbol))?;
    Ok(())
}
