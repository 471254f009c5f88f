use crate::handlers::{analytics, health, ingest};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let analytics_routes = Router::new()
        .route("/summary", get(analytics::summary))
        .route("/timeline", get(analytics::timeline))
        .route("/type-distribution", get(analytics::type_distribution))
        .route("/by-account", get(analytics::by_account))
        .route("/recent", get(analytics::recent));

    Router::new()
        .route("/transactions", post(ingest::submit_transaction))
        .route("/health", get(health::health))
        .nest("/api/analytics", analytics_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
