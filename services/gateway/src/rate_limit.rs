use crate::error::AppError;
use dashmap::DashMap;
use std::time::Instant;
use types::ids::AccountId;

/// Burst capacity per account.
const BURST: u32 = 200;
/// Steady-state refill rate, tokens per second.
const REFILL_PER_SEC: f64 = 100.0;

#[derive(Clone)]
struct Bucket {
    tokens: f64,
    last_update: Instant,
}

impl Bucket {
    fn new() -> Self {
        Self {
            tokens: BURST as f64,
            last_update: Instant::now(),
        }
    }

    fn allow_request(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update).as_secs_f64();

        // Refill tokens
        self.tokens = f64::min(BURST as f64, self.tokens + elapsed * REFILL_PER_SEC);
        self.last_update = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false // Rate limited
        }
    }
}

/// Token buckets keyed by account id, applied on the ingest path.
///
/// The producer retries storage failures with backoff; this bucket keeps
/// a runaway producer from monopolizing the journal.
pub struct RateLimiter {
    buckets: DashMap<AccountId, Bucket>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            buckets: DashMap::new(),
        }
    }

    pub fn check_ingest(&self, account: &AccountId) -> Result<(), AppError> {
        let mut bucket = self
            .buckets
            .entry(account.clone())
            .or_insert_with(Bucket::new);

        if bucket.allow_request() {
            Ok(())
        } else {
            Err(AppError::RateLimitExceeded(format!(
                "Ingest rate limit for account {account}"
            )))
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
