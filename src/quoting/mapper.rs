//! Maps store lookups onto response envelopes.

use crate::quoting::types::{Quote, QuoteId, QuoteResource, STATUS_SUCCESS};

/// Wrap a quote (or its absence) with a status message.
pub fn to_resource(quote: Option<Quote>, status: impl Into<String>) -> QuoteResource {
    QuoteResource {
        quote,
        status: status.into(),
    }
}

/// Resource for a quote that was found.
pub fn success(quote: Quote) -> QuoteResource {
    to_resource(Some(quote), STATUS_SUCCESS)
}

/// Resource for an id the store does not know.
pub fn missing(id: QuoteId) -> QuoteResource {
    to_resource(None, format!("Quote {} does not exist", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_keeps_quote() {
        let resource = success(Quote::new(7, "Stay hungry"));
        assert_eq!(resource.quote, Some(Quote::new(7, "Stay hungry")));
        assert_eq!(resource.status, "success");
    }

    #[test]
    fn test_missing_message_names_id() {
        let resource = missing(42);
        assert!(resource.is_missing());
        assert_eq!(resource.status, "Quote 42 does not exist");

        assert_eq!(missing(-3).status, "Quote -3 does not exist");
    }
}
