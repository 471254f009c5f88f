//! Transaction Store: concurrent id-keyed index over the journal
//!
//! The index is the atomicity point for idempotent inserts: the id's map
//! entry is claimed first, the journal append happens while the claim is
//! held, and the record is published only after the append succeeded.
//! Concurrent inserts of the same id therefore yield exactly one success,
//! and a failed append leaves no visible record.
//!
//! Reads never block on writes. `scan_all` returns a point-in-time
//! snapshot that may trail in-flight inserts.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::{info, warn};
use types::ids::TransactionId;
use types::transaction::Transaction;

use crate::journal::{JournalConfig, JournalError, JournalWriter};
use crate::reader::JournalReader;

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum StoreError {
    /// Idempotency conflict: a record with this id is already stored.
    /// Deterministic; never retried.
    #[error("Transaction already exists: {0}")]
    AlreadyExists(TransactionId),

    /// Journal failure. Transient from the caller's perspective and safe
    /// to retry: the insert left no visible record.
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),
}

// ── Transaction Store ───────────────────────────────────────────────

/// Durable keyed storage of immutable transactions.
pub struct TransactionStore {
    index: DashMap<TransactionId, Transaction>,
    journal: Mutex<JournalWriter>,
}

impl TransactionStore {
    /// Open the store, replaying the journal directory into the index.
    ///
    /// Unparseable journal lines (torn tail after a crash) are skipped
    /// with a warning. Duplicate ids in the journal keep the first
    /// record, mirroring insert semantics.
    pub fn open(config: JournalConfig) -> Result<Self, StoreError> {
        let reader = JournalReader::open(&config.dir)?;
        let (records, corruptions) = reader.replay()?;

        for c in &corruptions {
            warn!(
                file = %c.file.display(),
                line = c.line,
                "journal corruption skipped during recovery"
            );
        }

        let index = DashMap::new();
        let mut duplicates = 0u64;
        for tx in records {
            match index.entry(tx.id.clone()) {
                Entry::Occupied(_) => {
                    duplicates += 1;
                    warn!(id = %tx.id, "duplicate id in journal, keeping first record");
                }
                Entry::Vacant(slot) => {
                    slot.insert(tx);
                }
            }
        }

        let journal = JournalWriter::open(config)?;
        info!(
            records = index.len(),
            duplicates,
            corruptions = corruptions.len(),
            "transaction store recovered from journal"
        );

        Ok(Self {
            index,
            journal: Mutex::new(journal),
        })
    }

    /// Insert a transaction, rejecting duplicates by id.
    ///
    /// Durability ordering: the journal append completes before the
    /// record becomes visible in the index.
    pub fn insert(&self, tx: Transaction) -> Result<(), StoreError> {
        match self.index.entry(tx.id.clone()) {
            Entry::Occupied(entry) => Err(StoreError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(slot) => {
                {
                    // Lock order is always index shard then journal, so
                    // this cannot deadlock. A poisoned lock still holds a
                    // usable writer: the failed append never reached the
                    // index.
                    let mut journal = self
                        .journal
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner);
                    journal.append(&tx)?;
                }
                slot.insert(tx);
                Ok(())
            }
        }
    }

    /// Look up a transaction by id.
    pub fn get(&self, id: &TransactionId) -> Option<Transaction> {
        self.index.get(id).map(|r| r.value().clone())
    }

    /// Snapshot every stored transaction, unordered.
    ///
    /// Full-table read by design: this is the data source for the
    /// aggregation pass, not a paginated query path.
    pub fn scan_all(&self) -> Vec<Transaction> {
        self.index.iter().map(|r| r.value().clone()).collect()
    }

    /// Number of stored transactions.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

// ── Tests ───────────────────────────────────────────────────────────
