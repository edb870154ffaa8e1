//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID)
//!     → quote.rs (handler calls QuoteService)
//!     → JSON / text response
//! ```

pub mod middleware;
pub mod quote;
pub mod request;
pub mod server;

pub use request::{MakeUuidRequestId, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
