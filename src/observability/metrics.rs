//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): total requests by method, path, status
//! - `gateway_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Prometheus exporter on its own listener, enabled via config
//! - Recording happens in one axum middleware so handlers stay metric-free

use std::net::SocketAddr;
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "gateway_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Axum middleware that times every request and records its outcome.
pub async fn track(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    record_request(&method, &path, response.status().as_u16(), start);
    response
}
