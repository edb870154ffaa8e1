//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All errors are
//! returned together rather than stopping at the first one.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::QuotersConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address {0:?} is not a socket address")]
    MetricsAddress(String),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    LogLevel(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("store.quotes[{0}] is blank")]
    BlankQuote(usize),
}

/// Check a parsed configuration.
pub fn validate_config(config: &QuotersConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if !LOG_LEVELS.contains(&observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::LogLevel(observability.log_level.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    errors.extend(
        config
            .store
            .quotes
            .iter()
            .enumerate()
            .filter(|(_, text)| text.trim().is_empty())
            .map(|(i, _)| ValidationError::BlankQuote(i)),
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
