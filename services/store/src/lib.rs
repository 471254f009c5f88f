//! Durable Transaction Store
//!
//! Provides append-only journal writing, journal replay with torn-tail
//! detection, and a concurrent id-keyed index with idempotent
//! insert-or-reject semantics.
//!
//! A record becomes visible to readers only after its journal append
//! succeeded, so a crash never leaves a visible record that is not on
//! disk. Recovery replays the journal directory into the index at boot.

pub mod journal;
pub mod reader;
pub mod store;

pub use journal::{FlushPolicy, FsyncPolicy, JournalConfig, JournalError, JournalWriter};
pub use reader::{CorruptionRecord, JournalReader};
pub use store::{StoreError, TransactionStore};
