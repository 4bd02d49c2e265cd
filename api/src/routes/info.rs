use crate::{
    AppState,
    dto::{InfoResponse, RootResponse},
    uptime::format_uptime,
};
use axum::{
    Json,
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
};
use std::collections::BTreeMap;

pub const SERVICE_NAME: &str = "multi-region-demo";
pub const ROOT_MESSAGE: &str = "Multi-Region GCP Deployment Demo";

// Reported as `metadata.go_version`.
const GO_VERSION: &str = "1.21";

/// GET /
/// Also answers any path no other route matches.
pub async fn root(State(state): State<AppState>, method: Method) -> Response {
    let _timer = state.metrics.track(&method, "/");

    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
        region: state.settings.region(),
        version: state.settings.version(),
    })
    .into_response()
}

/// GET /info
pub async fn info(State(state): State<AppState>, method: Method) -> Response {
    let _timer = state.metrics.track(&method, "/info");

    let uptime = state.started_at.elapsed();

    let metadata = BTreeMap::from([
        ("go_version".to_string(), GO_VERSION.to_string()),
        ("build_date".to_string(), state.settings.build_date()),
    ]);

    Json(InfoResponse {
        service: SERVICE_NAME.to_string(),
        version: state.settings.version(),
        region: state.settings.region(),
        environment: state.settings.environment(),
        uptime: format_uptime(uptime),
        metadata,
    })
    .into_response()
}
