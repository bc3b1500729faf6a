//! Storage layer for ledger-cli
//!
//! Provides the flat ledger file store plus atomic file helpers shared with
//! the settings file.

pub mod file_io;
pub mod ledger_file;

pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use ledger_file::{parse_record, LedgerStore};
