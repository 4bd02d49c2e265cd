use crate::AppState;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

/// GET /metrics
/// Prometheus text exposition of the request counters and histograms.
pub async fn exporter(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, state.metrics.content_type())],
        state.metrics.render(),
    )
}
