//! In-memory ledger
//!
//! The ordered list of transactions for the lifetime of the process. Every
//! append is written through to the store before it returns.

use log::{debug, warn};

use crate::error::LedgerResult;
use crate::models::Transaction;
use crate::storage::LedgerStore;

/// Append-only transaction ledger backed by a [`LedgerStore`]
#[derive(Debug)]
pub struct Ledger {
    store: LedgerStore,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Open the ledger, loading everything the store holds
    pub fn open(store: LedgerStore) -> LedgerResult<Self> {
        let transactions = store.load()?;
        debug!("Opened ledger with {} transactions", transactions.len());
        Ok(Self {
            store,
            transactions,
        })
    }

    /// Add a transaction at the end and persist the whole ledger
    ///
    /// If persisting fails the transaction is not kept, so memory and disk
    /// stay in step.
    pub fn append(&mut self, txn: Transaction) -> LedgerResult<()> {
        self.transactions.push(txn);
        if let Err(e) = self.store.save(&self.transactions) {
            warn!("Failed to persist new transaction: {}", e);
            self.transactions.pop();
            return Err(e);
        }
        Ok(())
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }
}
