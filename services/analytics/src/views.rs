//! Derived view types for the dashboard API
//!
//! These structs serialize directly onto the wire; their field names are
//! the response contract. Amounts serialize as exact decimal strings,
//! timestamps as RFC 3339 UTC.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::AccountId;

/// Overall snapshot statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_credits: Decimal,
    pub total_debits: Decimal,
    /// Credits minus debits.
    pub net_balance: Decimal,
    pub total_transactions: u64,
    /// Mean over all transactions regardless of type; zero when empty.
    pub average_transaction: Decimal,
    pub unique_accounts: u64,
}

impl Summary {
    /// The well-defined zero view for an empty snapshot.
    pub fn empty() -> Self {
        Self {
            total_credits: Decimal::ZERO,
            total_debits: Decimal::ZERO,
            net_balance: Decimal::ZERO,
            total_transactions: 0,
            average_transaction: Decimal::ZERO,
            unique_accounts: 0,
        }
    }
}

/// One populated timeline bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBucket {
    /// Bucket start (epoch-aligned).
    pub timestamp: DateTime<Utc>,
    pub credits: Decimal,
    pub debits: Decimal,
    pub count: u64,
}

/// Total amount moved per transaction type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDistribution {
    pub credit: Decimal,
    pub debit: Decimal,
}

impl TypeDistribution {
    pub fn empty() -> Self {
        Self {
            credit: Decimal::ZERO,
            debit: Decimal::ZERO,
        }
    }
}

/// Per-account rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAggregate {
    pub account: AccountId,
    pub credits: Decimal,
    pub debits: Decimal,
    /// Credits minus debits for this account.
    pub balance: Decimal,
    pub count: u64,
}
