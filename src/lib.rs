//! ledger-cli - Terminal-based personal finance ledger
//!
//! This library provides the core functionality for the ledger-cli
//! application: recording dated income and expense entries in a flat text
//! file and deriving simple reports from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, budget limits)
//! - `storage`: Ledger file storage and atomic file helpers
//! - `ledger`: The in-memory, write-through ledger
//! - `reports`: List, summary and month reports
//! - `display`: Terminal formatting helpers
//! - `shell`: The interactive menu
//! - `cli`: Subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_cli::config::{LedgerPaths, Settings};
//! use ledger_cli::reports::ReportEngine;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = ledger_cli::cli::open_ledger(&paths, &settings)?;
//! let summary = ReportEngine::new(settings.budget.clone()).summary(ledger.transactions())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod shell;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
