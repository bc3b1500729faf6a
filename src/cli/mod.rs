//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger and reports.

pub mod report;
pub mod transaction;

pub use report::handle_summary;
pub use transaction::{handle_add, handle_filter, handle_list, transaction_from_args};

use std::io::{self, Write};

use clap::Subcommand;

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::{Money, TransactionKind};
use crate::reports::ReportEngine;
use crate::shell::Shell;
use crate::storage::LedgerStore;

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Run the interactive menu (the default)
    Shell,

    /// Record a transaction
    Add {
        /// Transaction date (YYYY-MM-DD)
        date: String,
        /// Income or Expense
        kind: TransactionKind,
        /// Category name
        category: String,
        /// Amount, e.g. 1200 or 1200.50
        amount: Money,
        /// Free-text note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// List all transactions in the order they were recorded
    #[command(alias = "ls")]
    List,

    /// Show income, expense, savings and spending by category
    Summary,

    /// List the transactions of one month
    Filter {
        /// Month key (YYYY-MM)
        month: String,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

/// Open the ledger described by the paths and settings
pub fn open_ledger(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<Ledger> {
    let store = LedgerStore::new(paths.ledger_file(), settings.malformed_records);
    Ledger::open(store)
}

/// Dispatch a subcommand, writing its output to `out`
pub fn handle_command<W: Write>(
    cmd: LedgerCommands,
    paths: &LedgerPaths,
    settings: &Settings,
    out: &mut W,
) -> LedgerResult<()> {
    let engine = ReportEngine::new(settings.budget.clone());

    match cmd {
        LedgerCommands::Shell => {
            let ledger = open_ledger(paths, settings)?;
            let stdin = io::stdin();
            let mut shell = Shell::new(ledger, engine, settings, stdin.lock(), &mut *out);
            shell.run()
        }
        LedgerCommands::Add {
            date,
            kind,
            category,
            amount,
            note,
        } => {
            let mut ledger = open_ledger(paths, settings)?;
            let txn = transaction_from_args(date, kind, category, amount, note);
            handle_add(&mut ledger, txn, out)
        }
        LedgerCommands::List => handle_list(&open_ledger(paths, settings)?, &engine, settings, out),
        LedgerCommands::Summary => {
            handle_summary(&open_ledger(paths, settings)?, &engine, settings, out)
        }
        LedgerCommands::Filter { month } => handle_filter(
            &open_ledger(paths, settings)?,
            &engine,
            settings,
            &month,
            out,
        ),
        LedgerCommands::Init => handle_init(paths, settings, out),
        LedgerCommands::Config => handle_config(paths, settings, out),
    }
}

fn handle_init<W: Write>(paths: &LedgerPaths, settings: &Settings, out: &mut W) -> LedgerResult<()> {
    if paths.is_initialized() {
        writeln!(out, "Settings already exist at: {}", paths.settings_file().display())?;
        return Ok(());
    }

    settings.save(paths)?;
    writeln!(out, "Initialized ledger-cli at: {}", paths.base_dir().display())?;
    writeln!(out, "Edit {} to change budget limits.", paths.settings_file().display())?;
    Ok(())
}

fn handle_config<W: Write>(paths: &LedgerPaths, settings: &Settings, out: &mut W) -> LedgerResult<()> {
    writeln!(out, "ledger-cli Configuration")?;
    writeln!(out, "========================")?;
    writeln!(out, "Base directory: {}", paths.base_dir().display())?;
    writeln!(out, "Settings file:  {}", paths.settings_file().display())?;
    writeln!(out, "Ledger file:    {}", paths.ledger_file().display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Currency symbol:   {}", settings.currency_symbol)?;
    writeln!(out, "  Malformed records: {:?}", settings.malformed_records)?;
    writeln!(out, "  Budget limits:")?;
    for (category, limit) in settings.budget.iter() {
        writeln!(
            out,
            "    {}: {}",
            category,
            limit.format_with_symbol(&settings.currency_symbol)
        )?;
    }
    Ok(())
}
