//! Rejection taxonomy for ingest payload validation
//!
//! Error taxonomy using thiserror. The Display strings are the exact
//! messages returned on the wire, so the variants here define the
//! ingest endpoint's 400 responses.

use thiserror::Error;

/// Reason a submitted payload was rejected by validation
///
/// Validation short-circuits on the first failing rule, so a payload with
/// several problems reports only the first one in field-check order
/// (id, account, amount, type, timestamp). Rejections are deterministic
/// and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Amount must be > 0")]
    InvalidAmount,

    #[error("Type must be 'credit' or 'debit'")]
    InvalidType,

    #[error("Invalid timestamp")]
    InvalidTimestamp,
}
