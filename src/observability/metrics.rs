//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sassy_compilations_total` (counter): compiles by outcome (`ok`, `error`)
//! - `sassy_compile_duration_seconds` (histogram): time spent in the compiler
//! - `sassy_requests_total` (counter): intercepted requests by status
//! - `sassy_cache_entries` (gauge): registered stylesheets
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Passthrough requests are not counted

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one compiler invocation.
pub fn record_compile(outcome: &'static str, started: Instant) {
    counter!("sassy_compilations_total", "outcome" => outcome).increment(1);
    histogram!("sassy_compile_duration_seconds").record(started.elapsed().as_secs_f64());
}

/// Record an intercepted request and its response status.
pub fn record_request(status: u16) {
    counter!("sassy_requests_total", "status" => status.to_string()).increment(1);
}

/// Record the number of registered stylesheets.
pub fn record_cache_entries(count: usize) {
    gauge!("sassy_cache_entries").set(count as f64);
}
