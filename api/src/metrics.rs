use crate::errors::ServerError;
use axum::http::{Method, StatusCode};
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::time::Instant;
use tracing::warn;

/// Request counters and latency histograms for every route.
///
/// Everything is registered on a private `Registry` so that each
/// `HttpMetrics` (and each test) starts from zero. On Linux the registry
/// also exports the `process_*` collector.
#[derive(Clone)]
pub struct HttpMetrics {
    registry: Registry,
    pub requests_total: IntCounterVec,
    pub request_duration: HistogramVec,
}

impl HttpMetrics {
    pub fn new() -> Result<Self, ServerError> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "endpoint", "status"],
        )?;
        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            ),
            &["method", "endpoint"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration,
        })
    }

    /// Starts timing a request. The observation is recorded when the
    /// returned guard is dropped.
    pub fn track(&self, method: &Method, endpoint: &'static str) -> RequestTimer {
        RequestTimer {
            metrics: self.clone(),
            method: method.to_string(),
            endpoint,
            status: StatusCode::OK,
            start: Instant::now(),
        }
    }

    pub fn record(&self, method: &str, endpoint: &str, status: StatusCode, seconds: f64) {
        self.requests_total
            .with_label_values(&[method, endpoint, status.as_str()])
            .inc();
        self.request_duration
            .with_label_values(&[method, endpoint])
            .observe(seconds);
    }

    /// Content type of [`HttpMetrics::render`].
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    /// Text exposition of everything in the registry.
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            warn!("Failed to encode metrics: {}", e);
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}

/// Records one counter increment and one duration observation on drop.
pub struct RequestTimer {
    metrics: HttpMetrics,
    method: String,
    endpoint: &'static str,
    status: StatusCode,
    start: Instant,
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed().as_secs_f64();
        self.metrics
            .record(&self.method, self.endpoint, self.status, elapsed);
    }
}
