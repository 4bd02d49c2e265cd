pub mod config;
pub mod dto;
pub mod errors;
pub mod metrics;
pub mod routes;
pub mod states;
pub mod uptime;

pub use states::AppState;

use axum::{Router, routing::any};
use crate::{config::Settings, errors::ServerError, metrics::HttpMetrics};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Route table, logged at startup.
pub const ROUTES: &[(&str, &str)] = &[
    ("/", "Service banner"),
    ("/health", "Liveness"),
    ("/readiness", "Readiness"),
    ("/info", "Build and deployment metadata"),
    ("/metrics", "Prometheus metrics"),
];

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", any(routes::info::root))
        .route("/health", any(routes::health::health_check))
        .route("/readiness", any(routes::health::readiness_check))
        .route("/info", any(routes::info::info))
        .route("/metrics", any(routes::metrics::exporter))
        // Unmatched paths are answered by the root handler
        .fallback(routes::info::root)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Binds `0.0.0.0:$PORT` and serves until the listener fails.
///
/// A port that cannot be bound is reported as [`ServerError::Bind`].
pub async fn serve(settings: Settings, metrics: HttpMetrics) -> Result<(), ServerError> {
    let port = settings.port();
    let region = settings.region();
    let version = settings.version();

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("Starting server on port {}", port);
    info!("Region: {}", region);
    info!("Version: {}", version);
    info!("Endpoints:");
    for (path, description) in ROUTES {
        info!("  {:<12} - {}", path, description);
    }

    let router = app(AppState::new(settings, metrics));

    axum::serve(listener, router)
        .await
        .map_err(ServerError::Serve)
}
