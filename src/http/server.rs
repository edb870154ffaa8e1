//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the quote and ping handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{QuotersConfig, TimeoutConfig};
use crate::http::middleware::track_metrics;
use crate::http::quote::{get_quote, list_quotes, ping, random_quote};
use crate::http::request::{MakeUuidRequestId, X_REQUEST_ID};
use crate::observability::metrics;
use crate::observability::tracing::make_request_span;
use crate::quoting::{InMemoryQuoteStore, QuoteService, QuoteStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: QuoteService,
}

/// HTTP server for the quote API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server backed by an in-memory store seeded from `config`.
    pub fn new(config: QuotersConfig) -> Self {
        let store = InMemoryQuoteStore::from_texts(config.store.quotes.iter().cloned());
        tracing::info!(quotes = store.count(), "Quote store seeded");
        metrics::record_store_size(store.count());

        let service = QuoteService::with_seed(Arc::new(store), config.service.random_seed);
        Self::with_service(config, service)
    }

    /// Create a server around an existing service.
    pub fn with_service(config: QuotersConfig, service: QuoteService) -> Self {
        let router = build_router(&config.timeouts, AppState { service });
        Self { router }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(timeouts: &TimeoutConfig, state: AppState) -> Router {
    Router::new()
        .route("/api", get(list_quotes))
        .route("/api/random", get(random_quote))
        .route("/api/{id}", get(get_quote))
        .route("/ping", get(ping))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(timeouts.request_secs)))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeUuidRequestId))
}
