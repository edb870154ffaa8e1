//! Quote storage.
//!
//! # Responsibilities
//! - Hold the quote records served by the API
//! - Assign ids densely from 1 in seed order
//! - Answer find-all, find-by-id and count lookups
//!
//! The store is populated once at startup and read-only afterwards, so
//! lookups take `&self` and need no locking.

use std::collections::BTreeMap;

use crate::quoting::types::{Quote, QuoteId};

/// Seed quotes used when the configuration does not provide any.
pub const DEFAULT_QUOTES: &[&str] = &[
    "Working with Spring Boot is like pair-programming with the Spring developers.",
    "With Boot you deploy everywhere you can find a JVM basically.",
    "Spring has come quite a ways in addressing developer enjoyment and ease of use since the last time I built an application using it.",
    "Previous to Spring Boot, I remember XML hell, confusing set up, and many hours of frustration.",
    "Spring Boot solves this problem. It gets rid of XML and wires up common components for me, so I don't have to spend hours scratching my head just to figure out how it's all pieced together.",
    "It embraces convention over configuration, providing an experience on par with frameworks that excel at early stage development, such as Ruby on Rails.",
    "The real benefit of Boot, however, is that it's just Spring. That means any direction the code takes, regardless of complexity, I know it's a safe bet.",
    "I don't worry about my code scaling. Boot allows the developer to peel back the layers and customize when it's appropriate while keeping the conventions that just work.",
    "So easy it is to switch container in #springboot.",
    "Really loving Spring Boot, makes stand alone Spring apps easy.",
    "I have two hours today to build an app from scratch. @springboot to the rescue!",
    "@springboot with @springframework is pure productivity! Who said in #java one has to write double the code than in other langs? #newFavLib",
];

/// Read access to stored quotes.
pub trait QuoteStore: Send + Sync {
    /// Every stored quote, in store order.
    fn find_all(&self) -> Vec<Quote>;

    /// The quote with the given id, if stored.
    fn find_by_id(&self, id: QuoteId) -> Option<Quote>;

    /// Number of stored quotes.
    fn count(&self) -> u64;
}

/// In-memory store keyed by id. Iteration order is id order, which is also
/// insertion order because ids are handed out sequentially.
#[derive(Debug, Default)]
pub struct InMemoryQuoteStore {
    quotes: BTreeMap<QuoteId, Quote>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed texts, assigning ids 1..=n.
    pub fn from_texts<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut store = Self::new();
        for text in texts {
            store.insert(text);
        }
        store
    }

    /// Append a quote, returning the stored record.
    pub fn insert(&mut self, text: impl Into<String>) -> Quote {
        let id = self.quotes.keys().next_back().copied().unwrap_or(0) + 1;
        let quote = Quote::new(id, text);
        self.quotes.insert(id, quote.clone());
        quote
    }
}

impl QuoteStore for InMemoryQuoteStore {
    fn find_all(&self) -> Vec<Quote> {
        self.quotes.values().cloned().collect()
    }

    fn find_by_id(&self, id: QuoteId) -> Option<Quote> {
        self.quotes.get(&id).cloned()
    }

    fn count(&self) -> u64 {
        self.quotes.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_dense_from_one() {
        let store = InMemoryQuoteStore::from_texts(["a", "b", "c"]);

        let ids: Vec<QuoteId> = store.find_all().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_find_by_id() {
        let store = InMemoryQuoteStore::from_texts(["first", "second"]);

        assert_eq!(store.find_by_id(2), Some(Quote::new(2, "second")));
        assert_eq!(store.find_by_id(0), None);
        assert_eq!(store.find_by_id(3), None);
        assert_eq!(store.find_by_id(-1), None);
    }

    #[test]
    fn test_find_all_preserves_seed_order() {
        let store = InMemoryQuoteStore::from_texts(DEFAULT_QUOTES.iter().copied());

        let texts: Vec<String> = store.find_all().into_iter().map(|q| q.text).collect();
        assert_eq!(texts, DEFAULT_QUOTES);
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryQuoteStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.find_all().is_empty());
    }
}
