//! Analytics Service
//!
//! Pure read-side computation over a snapshot of stored transactions,
//! producing the five dashboard views:
//! - Aggregate summary (totals, net balance, averages, distinct accounts)
//! - Time-bucketed credit/debit series
//! - Credit/debit amount distribution
//! - Per-account breakdown
//! - Recent-activity feed
//!
//! Every view is a pure function of the snapshot: stateless, recomputed
//! on demand, never persisted. All monetary sums use `Decimal` with no
//! intermediate float conversion, so totals are exact at any volume.
//! The empty snapshot yields zeros and empty collections, never an error.

pub mod aggregate;
pub mod bucket;
pub mod views;

pub use aggregate::{by_account, recent, summarize, timeline, type_distribution};
pub use bucket::Granularity;
pub use views::{AccountAggregate, Summary, TimelineBucket, TypeDistribution};

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
