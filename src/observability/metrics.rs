//! Metrics collection and exposition.
//!
//! # Metrics
//! - `catalog_requests_total` (counter): requests by method, route, status
//! - `catalog_request_duration_seconds` (histogram): latency distribution
//! - `catalog_dataset_records` (gauge): records loaded at startup
//!
//! # Design Decisions
//! - Route label is the matched route template, not the raw path, so ids
//!   and slugs do not explode label cardinality
//! - Recording is a no-op until a recorder is installed

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("catalog_requests_total", &labels).increment(1);
    metrics::histogram!("catalog_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_dataset_size(records: usize) {
    metrics::gauge!("catalog_dataset_records").set(records as f64);
}

/// Middleware recording count and latency for every request.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    record_request(&method, &route, response.status().as_u16(), start);
    response
}
