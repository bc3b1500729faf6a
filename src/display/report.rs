//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the reports and the shell.

/// Format a section title, e.g. `--- Summary ---`
pub fn format_section(title: &str) -> String {
    format!("--- {} ---", title)
}

/// Format a banner title, e.g. `===== Personal Finance Tracker =====`
pub fn format_banner(title: &str) -> String {
    format!("===== {} =====", title)
}

/// Left-align a label in a field of given width, followed by a colon
pub fn format_label(label: &str, width: usize) -> String {
    format!("{:<width$}: ", label, width = width)
}
