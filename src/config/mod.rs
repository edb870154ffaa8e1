//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → QuotersConfig (validated, immutable)
//!     → consumed once during startup
//! ```
//!
//! All fields have defaults so a minimal (or absent) file is enough.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, ObservabilityConfig, QuotersConfig, ServiceConfig, StoreConfig, TimeoutConfig,
};
