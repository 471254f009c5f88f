//! Gateway API service
//!
//! HTTP surface of the transaction analytics engine: one ingest endpoint
//! (validate, rate-limit, durable idempotent insert) and the read-only
//! analytics endpoints the dashboard polls. Each analytics request scans
//! the store once, feeds the snapshot to the aggregation pass, and
//! serializes the view; nothing is cached between calls.

pub mod error;
pub mod handlers;
pub mod models;
pub mod rate_limit;
pub mod router;
pub mod state;
