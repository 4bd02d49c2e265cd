use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// GET /
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub region: String,
    pub version: String,
}

/// GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub region: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// GET /readiness
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
}

/// GET /info
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub service: String,
    pub version: String,
    pub region: String,
    pub environment: String,
    pub uptime: String,
    pub metadata: BTreeMap<String, String>,
}
