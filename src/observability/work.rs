//! Instrumented units of work.
//!
//! A unit of work runs inside its own span and, once it finishes normally,
//! leaves one observation in the `do_work` histogram. The span is attached
//! with [`Instrument`], so it is entered on every poll and closed when the
//! future completes or is dropped. A dropped (cancelled) future never reaches
//! the histogram record.

use std::future::Future;

use tracing::{Instrument, Span};

use crate::observability::metrics::record_do_work;

/// Run `work` inside `span`, then record `value_ms` against `method`.
pub async fn observe_work<F>(span: Span, method: &'static str, value_ms: u64, work: F) -> F::Output
where
    F: Future,
{
    let output = work.instrument(span).await;
    record_do_work(method, value_ms);
    output
}
