//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models and report sections for
//! terminal display.

pub mod report;
pub mod transaction;

pub use report::{format_banner, format_label, format_section};
pub use transaction::{format_transaction_row, format_transaction_rows};
