//! Prometheus metrics for the tournament server.
//!
//! Metrics are exposed in Prometheus text format on a dedicated listener
//! when `METRICS_BIND` is configured. Without an installed exporter every
//! recording call is a no-op.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use fh_server::metrics;
//! use std::net::SocketAddr;
//!
//! let addr: SocketAddr = "127.0.0.1:9090".parse().unwrap();
//! metrics::init_metrics(addr).unwrap();
//!
//! metrics::http_requests_total("POST", "/state", 200);
//! metrics::scores_recorded_total();
//! ```

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Tournament Metrics
// ============================================================================

/// Increment accepted score submissions.
pub fn scores_recorded_total() {
    metrics::counter!("scores_recorded_total").increment(1);
}

/// Increment rejected score submissions.
pub fn score_rejections_total(reason: &'static str) {
    metrics::counter!("score_rejections_total", "reason" => reason).increment(1);
}

/// Increment completed rounds.
pub fn rounds_advanced_total() {
    metrics::counter!("rounds_advanced_total").increment(1);
}

/// Set the current round number.
pub fn current_round(round: usize) {
    metrics::gauge!("current_round").set(round as f64);
}
