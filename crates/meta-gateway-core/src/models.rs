//! Core data models shared by every adapter.
//!
//! These types are constructed fresh per request and serialized straight
//! into tool responses. Optional fields are skipped when absent so the wire
//! format never carries a meaningless `null`.

use serde::{Deserialize, Serialize};

/// One matched metadata item.
///
/// `source`, `logical_name`, `physical_name` and `kind` are always set by the
/// adapter that produced the match. `score` is only populated by adapters
/// capable of scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResult {
    /// Backend identifier (e.g. `"postgres"`, `"elasticsearch_template"`, `"vector"`).
    pub source: String,
    /// Human-facing name of the matched entity.
    pub logical_name: String,
    /// Underlying technical identifier.
    pub physical_name: String,
    /// Category tag (`TABLE`, `META_API`, `SEARCH_QUERY`, ...). Backend-defined.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Backend-specific locator: schema, index name, health info.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl MetaResult {
    /// Build a result with the four mandatory fields set.
    pub fn new(
        source: impl Into<String>,
        logical_name: impl Into<String>,
        physical_name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            logical_name: logical_name.into(),
            physical_name: physical_name.into(),
            kind: kind.into(),
            description: None,
            location: None,
            score: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// Outcome of a lightweight reachability check against one backend.
///
/// `error` is present iff `ok` is false. Use [`ConnectionStatus::ok`] and
/// [`ConnectionStatus::failed`] rather than building the struct by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConnectionStatus {
    pub fn ok() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// Health-check entry for one configured adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceHealth {
    pub name: String,
    #[serde(flatten)]
    pub status: ConnectionStatus,
}

/// Per-adapter outcome of one search dispatch.
///
/// Exactly one of `count` (when `ok`) or `error` (when not `ok`) is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReport {
    pub name: String,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SourceReport {
    pub fn succeeded(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            ok: true,
            count: Some(count),
            error: None,
        }
    }

    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ok: false,
            count: None,
            error: Some(error.into()),
        }
    }
}

/// The merged answer to one fan-out search.
///
/// `total == results.len()`. `results` keeps dispatch order and then each
/// adapter's own order; it is never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedSearchResponse {
    pub query: String,
    /// The source filter the caller asked for (`"all"` when unset).
    pub source: String,
    pub total: usize,
    pub results: Vec<MetaResult>,
    pub sources: Vec<SourceReport>,
}
