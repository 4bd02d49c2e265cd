// ============================================================================
// MULTI-REGION STATUS SERVICE
// ============================================================================

// - Liveness and readiness stubs
// - Build/deployment metadata from the environment
// - Per-route request counters and latency histograms
// - Prometheus scrape endpoint

use region_status::{config::Settings, errors::ServerError, metrics::HttpMetrics, serve};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let settings = Settings::from_env();
    let metrics = HttpMetrics::new()?;

    serve(settings, metrics).await
}
