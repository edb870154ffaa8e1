//! Quote service: store lookups shaped into response envelopes, plus the
//! instrumented `ping` used to demonstrate tracing and metrics.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::observability::observe_work;
use crate::quoting::mapper;
use crate::quoting::store::QuoteStore;
use crate::quoting::types::{QuoteId, QuoteResource};

/// Exclusive upper bound of the simulated `ping` delay.
pub const PING_MAX_DELAY_MS: u64 = 200;

/// Body returned by `ping`.
pub const PONG: &str = "pong";

/// Status returned by `get_random` when there is nothing to draw from.
pub const STATUS_EMPTY_STORE: &str = "No quotes exist";

/// Read-side service over a [`QuoteStore`].
///
/// Cloning is cheap; clones share the store and the random source.
#[derive(Clone)]
pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
    rng: Arc<Mutex<StdRng>>,
}

impl QuoteService {
    /// Create a service with an explicit random source.
    pub fn new(store: Arc<dyn QuoteStore>, rng: StdRng) -> Self {
        Self {
            store,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Create a service seeded from `seed`, or from OS entropy when `None`.
    pub fn with_seed(store: Arc<dyn QuoteStore>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(store, rng)
    }

    /// Every stored quote, each marked successful, in store order.
    pub fn list_all(&self) -> Vec<QuoteResource> {
        let quotes: Vec<QuoteResource> = self
            .store
            .find_all()
            .into_iter()
            .map(mapper::success)
            .collect();

        tracing::debug!(count = quotes.len(), response = ?quotes, "Response is");
        quotes
    }

    /// The quote with `id`, or the sentinel with an explanatory status.
    pub fn get_by_id(&self, id: QuoteId) -> QuoteResource {
        let resource = match self.store.find_by_id(id) {
            Some(quote) => mapper::success(quote),
            None => mapper::missing(id),
        };

        tracing::debug!(id, found = !resource.is_missing(), response = ?resource, "Response is");
        resource
    }

    /// A uniformly drawn quote with id in `[1, count]`.
    pub fn get_random(&self) -> QuoteResource {
        let count = self.store.count();
        if count == 0 {
            tracing::debug!("No quotes to draw from");
            return mapper::to_resource(None, STATUS_EMPTY_STORE);
        }

        let id = self.draw(1..=count as QuoteId);
        self.get_by_id(id)
    }

    /// Sleep for a random delay inside a `doWork` span and record the delay.
    pub async fn ping(&self) -> &'static str {
        let delay_ms = self.draw_ping_delay();

        observe_work(tracing::info_span!("doWork", delay_ms), "ping", delay_ms, async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            tracing::info!("A sample log message!");
        })
        .await;

        PONG
    }

    pub(crate) fn draw_ping_delay(&self) -> u64 {
        self.draw(0..PING_MAX_DELAY_MS)
    }

    fn draw<T, R>(&self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng
            .lock()
            .expect("random source mutex poisoned")
            .gen_range(range)
    }
}
