use crate::error::AppError;
use crate::models::{RecentParams, TimelineParams};
use crate::state::AppState;
use analytics::{AccountAggregate, Granularity, Summary, TimelineBucket, TypeDistribution};
use axum::{
    extract::{Query, State},
    Json,
};
use types::transaction::Transaction;

/// Default length of the recent feed.
const DEFAULT_RECENT_LIMIT: usize = 10;
/// Upper bound on the recent feed length.
const MAX_RECENT_LIMIT: usize = 1000;

pub async fn summary(State(state): State<AppState>) -> Json<Summary> {
    Json(analytics::summarize(&state.store.scan_all()))
}

pub async fn timeline(
    State(state): State<AppState>,
    Query(params): Query<TimelineParams>,
) -> Result<Json<Vec<TimelineBucket>>, AppError> {
    let granularity = match params.granularity.as_deref() {
        None => Granularity::default(),
        Some(label) => Granularity::from_label(label)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown granularity: {label}")))?,
    };

    Ok(Json(analytics::timeline(
        &state.store.scan_all(),
        granularity,
    )))
}

pub async fn type_distribution(State(state): State<AppState>) -> Json<TypeDistribution> {
    Json(analytics::type_distribution(&state.store.scan_all()))
}

pub async fn by_account(State(state): State<AppState>) -> Json<Vec<AccountAggregate>> {
    Json(analytics::by_account(&state.store.scan_all()))
}

pub async fn recent(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> Json<Vec<Transaction>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .min(MAX_RECENT_LIMIT);

    Json(analytics::recent(&state.store.scan_all(), limit))
}
