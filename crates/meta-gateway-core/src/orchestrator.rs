//! Concurrent fan-out of one search to many adapters.
//!
//! Every targeted adapter gets its own future; all of them are polled
//! together by [`join_all`] and every one runs to completion. A failing or
//! panicking adapter never cancels, blocks, or fails its siblings: its
//! outcome is recorded and the join keeps waiting for the rest.
//!
//! There is no concurrency limit and no per-call timeout. An adapter that
//! never resolves stalls the whole response.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::future::join_all;
use futures::FutureExt;
use tracing::{debug, warn};

use crate::adapter::MetaAdapter;
use crate::aggregate::{aggregate, unconfigured};
use crate::models::{AggregatedSearchResponse, MetaResult};
use crate::registry::{AdapterRegistry, ALL_SOURCES};

/// Why a single adapter call did not produce results.
#[derive(Debug)]
pub enum Failure {
    /// The adapter returned an error.
    Error(anyhow::Error),
    /// The adapter panicked; carries the panic payload as text.
    Panicked(String),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Alternate form renders the whole context chain: "outer: inner".
            Failure::Error(e) => write!(f, "{:#}", e),
            Failure::Panicked(msg) => write!(f, "adapter panicked: {}", msg),
        }
    }
}

/// Settled result of one adapter's search, tagged with the adapter name.
#[derive(Debug)]
pub struct AdapterOutcome {
    pub name: String,
    pub result: Result<Vec<MetaResult>, Failure>,
}

/// Run `future` to completion, turning a panic into `Err(message)`.
pub(crate) async fn settle<F: Future>(future: F) -> Result<F::Output, String> {
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(panic_message)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Dispatch `search(query)` to every target concurrently and wait for all
/// of them to settle.
///
/// The returned outcomes are in target order, one per target.
pub async fn dispatch_search(targets: &[&dyn MetaAdapter], query: &str) -> Vec<AdapterOutcome> {
    let calls = targets.iter().map(|adapter| async move {
        let name = adapter.name().to_string();
        debug!(adapter = %name, "dispatching search");

        let result = match settle(adapter.search(query)).await {
            Ok(Ok(results)) => Ok(results),
            Ok(Err(e)) => Err(Failure::Error(e)),
            Err(msg) => Err(Failure::Panicked(msg)),
        };

        match &result {
            Ok(results) => debug!(adapter = %name, count = results.len(), "search settled"),
            Err(failure) => warn!(adapter = %name, error = %failure, "search failed"),
        }

        AdapterOutcome { name, result }
    });

    join_all(calls).await
}

/// Select targets from `registry`, fan the query out, and aggregate.
///
/// A filter that matches no configured adapter yields a well-formed empty
/// response with a single failed source report; no adapter is called.
pub async fn search_registry(
    registry: &AdapterRegistry,
    query: &str,
    filter: Option<&str>,
) -> AggregatedSearchResponse {
    let source = filter.unwrap_or(ALL_SOURCES);
    let targets = registry.select(filter);

    if targets.is_empty() {
        debug!(source, "no adapter selected");
        return unconfigured(query, source);
    }

    let outcomes = dispatch_search(&targets, query).await;
    aggregate(query, source, outcomes)
}
