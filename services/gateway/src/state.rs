use crate::rate_limit::RateLimiter;
use std::sync::Arc;
use store::TransactionStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TransactionStore>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(store: Arc<TransactionStore>) -> Self {
        Self {
            store,
            rate_limiter: Arc::new(RateLimiter::new()),
        }
    }
}
