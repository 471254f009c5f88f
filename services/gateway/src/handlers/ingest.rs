use crate::error::AppError;
use crate::models::IngestResponse;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;
use types::transaction::Transaction;

pub async fn submit_transaction(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<IngestResponse>, AppError> {
    // 1. Validate the untyped payload into a typed transaction
    let tx = Transaction::from_payload(&payload)?;

    // 2. Per-account ingest budget
    state.rate_limiter.check_ingest(&tx.account)?;

    // 3. Durable idempotent insert; journal IO stays off the async workers
    let id = tx.id.clone();
    let account = tx.account.clone();
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || store.insert(tx))
        .await
        .map_err(|e| AppError::InternalError(e.into()))??;

    info!(id = %id, account = %account, "transaction stored");

    Ok(Json(IngestResponse {
        message: "Transaction stored successfully".to_string(),
    }))
}
