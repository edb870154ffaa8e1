//! Quoters: a small quote API with request tracing and metrics.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod quoting;

pub use config::schema::QuotersConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use quoting::{QuoteService, QuoteStore};
