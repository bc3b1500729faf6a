//! Ledger file storage
//!
//! Reads and writes the flat ledger file: one transaction per line, fields
//! `date,type,category,amount,note` separated by commas. Fields that contain
//! a comma or a quote are quoted; plain fields are written bare, so files
//! with ordinary values stay readable by older versions.
//!
//! Older versions wrote every field bare. A line is read with csv quoting
//! only when writing its fields back reproduces the line exactly; any other
//! line is split on its first four commas and the rest is the note.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, StringRecord, Terminator};
use log::{debug, warn};

use crate::config::RecordPolicy;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionKind};

use super::file_io::write_atomic;

/// Number of fields in a ledger record
pub const FIELD_COUNT: usize = 5;

/// Persistent store for the ledger file
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
    policy: RecordPolicy,
}

impl LedgerStore {
    /// Create a store for the given file and malformed-record policy
    pub fn new(path: impl Into<PathBuf>, policy: RecordPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all transactions in file order
    ///
    /// A missing file is an empty ledger. Malformed records either abort the
    /// load or are skipped, depending on the store's policy.
    pub fn load(&self) -> LedgerResult<Vec<Transaction>> {
        if !self.path.exists() {
            debug!("No ledger file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            LedgerError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut transactions = Vec::new();
        let mut skipped = 0usize;

        for (idx, bytes) in BufReader::new(file).split(b'\n').enumerate() {
            let line = idx as u64 + 1;
            let parsed = match String::from_utf8(bytes?) {
                Ok(text) => {
                    let text = text.strip_suffix('\r').unwrap_or(&text);
                    if text.is_empty() {
                        continue;
                    }
                    parse_record(&split_line(text))
                }
                Err(_) => Err("line is not valid UTF-8".to_string()),
            };

            match (parsed, self.policy) {
                (Ok(txn), _) => transactions.push(txn),
                (Err(reason), RecordPolicy::Strict) => {
                    return Err(LedgerError::malformed(
                        self.path.display().to_string(),
                        line,
                        reason,
                    ));
                }
                (Err(reason), RecordPolicy::Skip) => {
                    warn!(
                        "Skipping malformed record in {} at line {}: {}",
                        self.path.display(),
                        line,
                        reason
                    );
                    skipped += 1;
                }
            }
        }

        debug!(
            "Loaded {} transactions from {} ({} skipped)",
            transactions.len(),
            self.path.display(),
            skipped
        );
        Ok(transactions)
    }

    /// Rewrite the whole ledger file with the given transactions, in order
    pub fn save(&self, transactions: &[Transaction]) -> LedgerResult<()> {
        write_atomic(&self.path, |out| {
            let mut writer = record_writer(out);

            for txn in transactions {
                writer.write_record(to_record(txn))?;
            }
            writer.flush()?;
            Ok(())
        })?;

        debug!(
            "Saved {} transactions to {}",
            transactions.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn record_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out)
}

/// Split one line of the ledger file into its fields
fn split_line(line: &str) -> StringRecord {
    if line.contains('"') {
        if let Some(record) = read_quoted(line) {
            return record;
        }
    }
    line.splitn(FIELD_COUNT, ',').collect()
}

/// Read a line as csv, but only if it is exactly what the writer produces
fn read_quoted(line: &str) -> Option<StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    if !reader.read_record(&mut record).ok()? {
        return None;
    }

    let mut writer = record_writer(Vec::new());
    writer.write_record(&record).ok()?;
    let written = writer.into_inner().ok()?;

    (written.strip_suffix(b"\n") == Some(line.as_bytes())).then_some(record)
}

/// The stored fields of a transaction, in file order
fn to_record(txn: &Transaction) -> [String; FIELD_COUNT] {
    [
        txn.date.clone(),
        txn.kind.to_string(),
        txn.category.clone(),
        txn.amount.to_string(),
        txn.note.clone(),
    ]
}

/// Parse one stored record into a transaction
///
/// Any fields past the fourth are joined back into the note.
pub fn parse_record(record: &StringRecord) -> Result<Transaction, String> {
    if record.len() < FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        ));
    }

    let amount = Money::parse(&record[3]).map_err(|e| e.to_string())?;

    let (kind, recognised) = TransactionKind::from_stored(&record[1]);
    if !recognised {
        warn!(
            "Unrecognised transaction type '{}' on {}; treating it as Expense",
            &record[1], &record[0]
        );
    }

    let note = if record.len() == FIELD_COUNT {
        record[4].to_string()
    } else {
        record.iter().skip(4).collect::<Vec<_>>().join(",")
    };

    Ok(Transaction::new(&record[0], kind, &record[2], amount, note))
}
