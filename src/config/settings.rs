//! User settings for ledger-cli
//!
//! Manages user preferences: currency symbol, category budget
//! limits and how malformed ledger records are treated on load.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::BudgetLimits;
use crate::storage::file_io::{read_json, write_json_atomic};

/// What to do with a ledger line that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordPolicy {
    /// Abort the load with the file name and line number
    #[default]
    Strict,
    /// Log a warning and leave the line out
    Skip,
}

/// User settings for ledger-cli
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Monthly spending limit per category
    #[serde(default)]
    pub budget: BudgetLimits,

    /// Policy for malformed records in the ledger file
    #[serde(default)]
    pub malformed_records: RecordPolicy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            budget: BudgetLimits::default(),
            malformed_records: RecordPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use the defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();
        if settings_path.exists() {
            log::debug!("Loading settings from {}", settings_path.display());
        }

        read_json(&settings_path).map_err(|e| {
            LedgerError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
