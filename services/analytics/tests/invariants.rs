//! Conservation properties of the aggregation passes
//!
//! These hold for any snapshot: totals are conserved across every view,
//! so the dashboard's numbers can never disagree with each other no
//! matter how transactions are distributed over accounts and time.

use analytics::{by_account, recent, summarize, timeline, type_distribution, Granularity};
use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use types::ids::{AccountId, TransactionId};
use types::transaction::{Transaction, TxType};

fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn snapshot_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        (
            1i64..1_000_000,      // cents
            0usize..6,            // account pool index
            any::<bool>(),        // credit?
            0i64..2_000_000,      // seconds offset, spans ~23 days
        ),
        0..200,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (cents, acct, credit, offset))| Transaction {
                id: TransactionId::new(format!("tx-{i:05}")),
                account: AccountId::new(format!("ACC-{acct}")),
                amount: Decimal::new(cents, 2),
                tx_type: if credit { TxType::Credit } else { TxType::Debit },
                timestamp: base_time() + Duration::seconds(offset),
            })
            .collect()
    })
}

fn granularity_strategy() -> impl Strategy<Value = Granularity> {
    prop::sample::select(Granularity::all().to_vec())
}

proptest! {
    #[test]
    fn prop_net_balance_identity(txs in snapshot_strategy()) {
        let summary = summarize(&txs);
        prop_assert_eq!(
            summary.total_credits - summary.total_debits,
            summary.net_balance
        );
        prop_assert_eq!(summary.total_transactions as usize, txs.len());
    }

    #[test]
    fn prop_average_transaction(txs in snapshot_strategy()) {
        let summary = summarize(&txs);
        if txs.is_empty() {
            prop_assert_eq!(summary.average_transaction, Decimal::ZERO);
        } else {
            let expected = (summary.total_credits + summary.total_debits)
                / Decimal::from(txs.len() as u64);
            prop_assert_eq!(summary.average_transaction, expected);
        }
    }

    #[test]
    fn prop_account_balances_sum_to_net(txs in snapshot_strategy()) {
        let summary = summarize(&txs);
        let rollup = by_account(&txs);

        let balance_sum: Decimal = rollup.iter().map(|a| a.balance).sum();
        prop_assert_eq!(balance_sum, summary.net_balance);

        let count_sum: u64 = rollup.iter().map(|a| a.count).sum();
        prop_assert_eq!(count_sum, summary.total_transactions);

        prop_assert_eq!(rollup.len() as u64, summary.unique_accounts);
    }

    #[test]
    fn prop_timeline_conserves_totals(
        txs in snapshot_strategy(),
        granularity in granularity_strategy(),
    ) {
        let summary = summarize(&txs);
        let buckets = timeline(&txs, granularity);

        let credits: Decimal = buckets.iter().map(|b| b.credits).sum();
        let debits: Decimal = buckets.iter().map(|b| b.debits).sum();
        let count: u64 = buckets.iter().map(|b| b.count).sum();

        prop_assert_eq!(credits, summary.total_credits);
        prop_assert_eq!(debits, summary.total_debits);
        prop_assert_eq!(count, summary.total_transactions);

        // Strictly ascending bucket starts, each aligned to its boundary
        prop_assert!(buckets.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        prop_assert!(buckets
            .iter()
            .all(|b| granularity.align(b.timestamp) == b.timestamp));
    }

    #[test]
    fn prop_distribution_matches_summary(txs in snapshot_strategy()) {
        let summary = summarize(&txs);
        let dist = type_distribution(&txs);
        prop_assert_eq!(dist.credit, summary.total_credits);
        prop_assert_eq!(dist.debit, summary.total_debits);
    }

    #[test]
    fn prop_recent_bounded_and_sorted(
        txs in snapshot_strategy(),
        limit in 0usize..50,
    ) {
        let feed = recent(&txs, limit);
        prop_assert_eq!(feed.len(), limit.min(txs.len()));
        prop_assert!(
            feed.windows(2).all(|w| {
                w[0].timestamp > w[1].timestamp
                    || (w[0].timestamp == w[1].timestamp && w[0].id > w[1].id)
            }),
            "feed not sorted descending by (timestamp, id)"
        );
    }
}
