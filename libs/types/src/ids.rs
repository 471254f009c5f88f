//! Unique identifier types for engine entities
//!
//! Both identifiers are opaque strings supplied by the producer. The
//! transaction id doubles as the idempotency key for ingestion, so the
//! engine never generates ids of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a transaction
///
/// Caller-supplied and opaque. Uniqueness across the store is enforced at
/// insert time; a second insert under the same id is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new TransactionId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier for a client account
///
/// Must be non-empty. Account ids group transactions for the per-account
/// aggregation views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new AccountId from a string
    ///
    /// # Panics
    /// Panics if the string is empty
    pub fn new(id: impl Into<String>) -> Self {
        let s = id.into();
        assert!(!s.is_empty(), "AccountId must be non-empty");
        Self(s)
    }

    /// Try to create an AccountId, returning None if empty
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let s = id.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Get the account string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_id_roundtrip() {
        let id = TransactionId::new("tx-0001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"tx-0001\"");

        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_transaction_id_ordering() {
        // Lexicographic ordering backs the recent-feed tiebreak
        let a = TransactionId::new("tx-0001");
        let b = TransactionId::new("tx-0002");
        assert!(b > a);
    }

    #[test]
    fn test_account_id_creation() {
        let account = AccountId::new("A123");
        assert_eq!(account.as_str(), "A123");
    }

    #[test]
    fn test_account_id_try_new() {
        assert!(AccountId::try_new("A123").is_some());
        assert!(AccountId::try_new("").is_none());
    }

    #[test]
    #[should_panic(expected = "AccountId must be non-empty")]
    fn test_account_id_empty_panics() {
        AccountId::new("");
    }

    #[test]
    fn test_account_id_serialization() {
        let account = AccountId::new("B456");
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, "\"B456\"");

        let deserialized: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }
}
