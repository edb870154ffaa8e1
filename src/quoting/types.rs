//! Quote domain types.

use serde::{Deserialize, Serialize, Serializer};

/// Identity of a stored quote. Assigned by the store, dense from 1.
pub type QuoteId = i64;

/// Status carried by every resource wrapping a stored quote.
pub const STATUS_SUCCESS: &str = "success";

/// Text of the placeholder rendered in place of a missing quote.
pub const SENTINEL_TEXT: &str = "None";

/// A single quote record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Store-assigned identifier.
    pub id: QuoteId,
    /// The quote itself.
    pub text: String,
}

impl Quote {
    pub fn new(id: QuoteId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Response envelope pairing a quote with a status message.
///
/// A lookup miss is carried in-band: `quote` is `None` and `status` explains
/// why. On the wire the missing quote is rendered as the sentinel
/// `{"id": null, "text": "None"}` so clients always see the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteResource {
    #[serde(serialize_with = "quote_or_sentinel")]
    pub quote: Option<Quote>,
    pub status: String,
}

impl QuoteResource {
    /// True when this resource wraps the sentinel rather than a stored quote.
    pub fn is_missing(&self) -> bool {
        self.quote.is_none()
    }
}

#[derive(Serialize)]
struct Sentinel {
    id: Option<QuoteId>,
    text: &'static str,
}

const SENTINEL: Sentinel = Sentinel {
    id: None,
    text: SENTINEL_TEXT,
};

fn quote_or_sentinel<S: Serializer>(
    quote: &Option<Quote>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match quote {
        Some(quote) => quote.serialize(serializer),
        None => SENTINEL.serialize(serializer),
    }
}
