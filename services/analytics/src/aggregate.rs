//! The five aggregation passes
//!
//! Each function is a single pass over the snapshot. Grouping passes use
//! `BTreeMap` so output ordering is deterministic: timeline buckets come
//! out ascending by bucket start, account rollups ascending by account
//! id. The recent feed sorts by timestamp descending with id descending
//! as the tiebreak.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};
use types::transaction::Transaction;

use crate::bucket::Granularity;
use crate::views::{AccountAggregate, Summary, TimelineBucket, TypeDistribution};

/// Compute the overall summary for a snapshot.
pub fn summarize(txs: &[Transaction]) -> Summary {
    if txs.is_empty() {
        return Summary::empty();
    }

    let mut total_credits = Decimal::ZERO;
    let mut total_debits = Decimal::ZERO;
    let mut accounts = HashSet::new();

    for tx in txs {
        if tx.tx_type.is_credit() {
            total_credits += tx.amount;
        } else {
            total_debits += tx.amount;
        }
        accounts.insert(&tx.account);
    }

    let count = txs.len() as u64;
    let average_transaction = (total_credits + total_debits) / Decimal::from(count);

    Summary {
        total_credits,
        total_debits,
        net_balance: total_credits - total_debits,
        total_transactions: count,
        average_transaction,
        unique_accounts: accounts.len() as u64,
    }
}

/// Group the snapshot into fixed-size time buckets.
///
/// Buckets with no transactions are omitted; output is ascending by
/// bucket start.
pub fn timeline(txs: &[Transaction], granularity: Granularity) -> Vec<TimelineBucket> {
    let mut buckets: BTreeMap<chrono::DateTime<chrono::Utc>, (Decimal, Decimal, u64)> =
        BTreeMap::new();

    for tx in txs {
        let start = granularity.align(tx.timestamp);
        let slot = buckets
            .entry(start)
            .or_insert((Decimal::ZERO, Decimal::ZERO, 0));
        if tx.tx_type.is_credit() {
            slot.0 += tx.amount;
        } else {
            slot.1 += tx.amount;
        }
        slot.2 += 1;
    }

    buckets
        .into_iter()
        .map(|(timestamp, (credits, debits, count))| TimelineBucket {
            timestamp,
            credits,
            debits,
            count,
        })
        .collect()
}

/// Total amount moved per transaction type (amounts, not counts).
pub fn type_distribution(txs: &[Transaction]) -> TypeDistribution {
    let mut dist = TypeDistribution::empty();
    for tx in txs {
        if tx.tx_type.is_credit() {
            dist.credit += tx.amount;
        } else {
            dist.debit += tx.amount;
        }
    }
    dist
}

/// Per-account rollup, ordered by account id ascending.
pub fn by_account(txs: &[Transaction]) -> Vec<AccountAggregate> {
    let mut accounts: BTreeMap<types::ids::AccountId, (Decimal, Decimal, u64)> = BTreeMap::new();

    for tx in txs {
        let slot = accounts
            .entry(tx.account.clone())
            .or_insert((Decimal::ZERO, Decimal::ZERO, 0));
        if tx.tx_type.is_credit() {
            slot.0 += tx.amount;
        } else {
            slot.1 += tx.amount;
        }
        slot.2 += 1;
    }

    accounts
        .into_iter()
        .map(|(account, (credits, debits, count))| AccountAggregate {
            account,
            balance: credits - debits,
            credits,
            debits,
            count,
        })
        .collect()
}

/// The `limit` most recent transactions, newest first.
///
/// Equal timestamps are broken by id descending so the feed is stable
/// across polls.
pub fn recent(txs: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = txs.to_vec();
    sorted.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.id.cmp(&a.id))
    });
    sorted.truncate(limit);
    sorted
}
