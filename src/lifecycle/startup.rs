//! Startup orchestration.
//!
//! Order: configuration → logging → metrics exporter → store and service →
//! listener → serve. Any error before serving is fatal.

use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, ConfigError, QuotersConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logging, metrics};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Load configuration from `path`, or fall back to defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<QuotersConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(QuotersConfig::default()),
    }
}

/// Bring the service up and run it until a termination signal arrives.
pub async fn run(config_path: Option<&Path>) -> Result<(), StartupError> {
    let config = resolve_config(config_path)?;

    if !logging::init_logging(&config.observability) {
        tracing::warn!("Tracing subscriber already installed, keeping the existing one");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "quoters starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        config_file = ?config_path,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    server
        .run(listener, server_shutdown)
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
