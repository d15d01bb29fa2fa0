//! Folding settled adapter outcomes into one response.

use crate::models::{AggregatedSearchResponse, SourceReport};
use crate::orchestrator::AdapterOutcome;

/// Error reported when a source filter matches no configured adapter.
pub const NO_ADAPTER_CONFIGURED: &str = "no adapter configured for source";

/// Build the response for one fan-out search.
///
/// Successful results are concatenated in outcome order, keeping each
/// adapter's own ordering. Every outcome yields exactly one
/// [`SourceReport`], successful or not. A failed report always has a
/// non-blank `error`.
pub fn aggregate(query: &str, source: &str, outcomes: Vec<AdapterOutcome>) -> AggregatedSearchResponse {
    let mut results = Vec::new();
    let mut sources = Vec::with_capacity(outcomes.len());

    for outcome in outcomes {
        match outcome.result {
            Ok(found) => {
                sources.push(SourceReport::succeeded(&outcome.name, found.len()));
                results.extend(found);
            }
            Err(failure) => {
                let mut message = failure.to_string();
                if message.trim().is_empty() {
                    message = format!("{} search failed", outcome.name);
                }
                sources.push(SourceReport::failed(&outcome.name, message));
            }
        }
    }

    AggregatedSearchResponse {
        query: query.to_string(),
        source: source.to_string(),
        total: results.len(),
        results,
        sources,
    }
}

/// The response for a filter that selected no adapter.
pub fn unconfigured(query: &str, source: &str) -> AggregatedSearchResponse {
    AggregatedSearchResponse {
        query: query.to_string(),
        source: source.to_string(),
        total: 0,
        results: Vec::new(),
        sources: vec![SourceReport::failed(source, NO_ADAPTER_CONFIGURED)],
    }
}
