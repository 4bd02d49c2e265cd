use crate::{config::Settings, metrics::HttpMetrics};
use std::time::Instant;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Built once at startup and handed to every handler through `State`.
///
/// `started_at` never changes after construction; `metrics` is the only
/// thing mutated per request and its counters are thread-safe on their own.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub metrics: HttpMetrics,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(settings: Settings, metrics: HttpMetrics) -> Self {
        Self {
            settings,
            metrics,
            started_at: Instant::now(),
        }
    }
}
