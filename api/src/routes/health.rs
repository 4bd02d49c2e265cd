use crate::{
    AppState,
    dto::{HealthResponse, ReadinessResponse},
};
use axum::{
    Json,
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
};
use chrono::Utc;

/// GET /health
/// Liveness stub: always 200 and "healthy", no dependency checks.
pub async fn health_check(State(state): State<AppState>, method: Method) -> Response {
    let _timer = state.metrics.track(&method, "/health");

    // Encoded while the timer is still live
    Json(HealthResponse {
        status: "healthy".to_string(),
        region: state.settings.region(),
        version: state.settings.version(),
        timestamp: Utc::now(),
    })
    .into_response()
}

/// GET /readiness
/// Always ready, regardless of configuration.
pub async fn readiness_check(State(state): State<AppState>, method: Method) -> Response {
    let _timer = state.metrics.track(&method, "/readiness");

    Json(ReadinessResponse {
        status: "ready".to_string(),
    })
    .into_response()
}
