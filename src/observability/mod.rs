//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and services produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!     → tracing.rs (per-request spans with request IDs)
//!     → work.rs (span + histogram around simulated work)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Prometheus scrape endpoint
//! ```

pub mod logging;
pub mod metrics;
#[cfg(test)]
pub(crate) mod testing;
pub mod tracing;
pub mod work;

pub use work::observe_work;
