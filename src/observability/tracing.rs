//! Request spans.
//!
//! Every HTTP request gets one span carrying its method, URI and request id
//! so that log lines emitted by handlers can be correlated.

use axum::{body::Body, http::Request};
use tracing::Span;

use crate::http::request::X_REQUEST_ID;

/// Span factory for [`tower_http::trace::TraceLayer`].
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
