use serde::{Deserialize, Serialize};

/// Body returned by a successful ingest.
#[derive(Debug, Clone, Serialize)]
pub struct IngestResponse {
    pub message: String,
}

/// Body returned by the health probe.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Query parameters for the timeline endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineParams {
    pub granularity: Option<String>,
}

/// Query parameters for the recent feed.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}
