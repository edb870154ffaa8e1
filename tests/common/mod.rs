//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use quoters::{HttpServer, QuotersConfig, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// Configuration with the given seed quotes, a fixed seed and no exporter.
pub fn test_config(quotes: &[&str]) -> QuotersConfig {
    let mut config = QuotersConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.observability.metrics_enabled = false;
    config.store.quotes = quotes.iter().map(|q| q.to_string()).collect();
    config.service.random_seed = Some(1234);
    config
}

pub fn test_router(quotes: &[&str]) -> Router {
    HttpServer::new(test_config(quotes)).router()
}

/// Send a GET through the router and collect the whole response.
pub async fn get(router: &Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Start a live server on an ephemeral port.
pub async fn start_server(
    quotes: &[&str],
) -> (SocketAddr, Shutdown, JoinHandle<Result<(), std::io::Error>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(test_config(quotes));
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    (addr, shutdown, handle)
}
