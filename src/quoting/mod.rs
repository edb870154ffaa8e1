//! Quote domain: records, storage, response shaping and the read service.

pub mod mapper;
pub mod service;
pub mod store;
pub mod types;

pub use service::QuoteService;
pub use store::{InMemoryQuoteStore, QuoteStore};
pub use types::{Quote, QuoteId, QuoteResource};
