//! Metrics collection and exposition.
//!
//! # Metrics
//! - `do_work` (histogram): simulated work duration in ms, by method
//! - `http_requests_total` (counter): requests by method, route, status
//! - `http_request_duration_seconds` (histogram): latency by method, route
//! - `quoters_store_quotes` (gauge): number of seeded quotes

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

pub const DO_WORK: &str = "do_work";
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
pub const STORE_QUOTES: &str = "quoters_store_quotes";

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(
            address = %addr,
            error = %e,
            "Failed to install metrics exporter"
        ),
    }
}

/// Record one observation of simulated work.
pub fn record_do_work(method: &'static str, value_ms: u64) {
    metrics::histogram!(DO_WORK, "method" => method).record(value_ms as f64);
}

/// Record a completed HTTP request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!(HTTP_REQUESTS_TOTAL, &labels).increment(1);

    let labels = [("method", method.to_string()), ("path", path.to_string())];
    metrics::histogram!(HTTP_REQUEST_DURATION_SECONDS, &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Publish the size of the quote store.
pub fn record_store_size(count: u64) {
    metrics::gauge!(STORE_QUOTES).set(count as f64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_do_work_is_labelled_by_method() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            record_do_work("ping", 120);
        });

        let rendered = handle.render();
        assert!(rendered.contains("do_work"), "{}", rendered);
        assert!(rendered.contains("method=\"ping\""), "{}", rendered);
    }

    #[test]
    fn test_request_counter_labels() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            record_request("GET", "/api/{id}", 200, Instant::now());
        });

        let rendered = handle.render();
        assert!(rendered.contains("http_requests_total"), "{}", rendered);
        assert!(rendered.contains("path=\"/api/{id}\""), "{}", rendered);
        assert!(rendered.contains("status=\"200\""), "{}", rendered);
    }
}
