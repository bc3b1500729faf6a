//! CLI commands for reports

use std::io::Write;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::reports::ReportEngine;

/// Print totals, savings and per-category spending with budget alerts
pub fn handle_summary<W: Write>(
    ledger: &Ledger,
    engine: &ReportEngine,
    settings: &Settings,
    out: &mut W,
) -> LedgerResult<()> {
    let report = engine.summary(ledger.transactions())?;
    write!(out, "{}", report.format_terminal(&settings.currency_symbol))?;
    Ok(())
}
