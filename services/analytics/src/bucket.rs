//! Timeline bucket granularities
//!
//! Buckets are fixed-size time windows aligned to the epoch (hourly
//! buckets close on hour boundaries). A transaction belongs to the bucket
//! whose window contains its timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported timeline bucket sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Granularity {
    /// 1 minute
    M1,
    /// 5 minutes
    M5,
    /// 15 minutes
    M15,
    /// 30 minutes
    M30,
    /// 1 hour
    H1,
    /// 4 hours
    H4,
    /// 1 day
    D1,
}

impl Granularity {
    /// Duration of this bucket size in seconds.
    pub fn duration_secs(&self) -> i64 {
        match self {
            Granularity::M1 => 60,
            Granularity::M5 => 5 * 60,
            Granularity::M15 => 15 * 60,
            Granularity::M30 => 30 * 60,
            Granularity::H1 => 3600,
            Granularity::H4 => 4 * 3600,
            Granularity::D1 => 86_400,
        }
    }

    /// All supported granularities.
    pub fn all() -> &'static [Granularity] {
        &[
            Granularity::M1,
            Granularity::M5,
            Granularity::M15,
            Granularity::M30,
            Granularity::H1,
            Granularity::H4,
            Granularity::D1,
        ]
    }

    /// Floor a timestamp to the start of its bucket.
    pub fn align(&self, timestamp: DateTime<Utc>) -> DateTime<Utc> {
        let secs = self.duration_secs();
        let aligned = timestamp.timestamp().div_euclid(secs) * secs;
        DateTime::from_timestamp(aligned, 0).expect("aligned timestamp within range")
    }

    /// Query-parameter label for this granularity.
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::M1 => "1m",
            Granularity::M5 => "5m",
            Granularity::M15 => "15m",
            Granularity::M30 => "30m",
            Granularity::H1 => "1h",
            Granularity::H4 => "4h",
            Granularity::D1 => "1d",
        }
    }

    /// Parse a query-parameter label, returning None for unknown labels.
    pub fn from_label(label: &str) -> Option<Granularity> {
        Granularity::all().iter().copied().find(|g| g.label() == label)
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::H1
    }
}
