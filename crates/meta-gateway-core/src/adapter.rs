//! The adapter contract every backend connector satisfies.
//!
//! A backend (relational catalog, search-index service, static lookup
//! file, ...) plugs into the gateway by implementing [`MetaAdapter`].
//! Backends with a templated query mode additionally implement
//! [`TemplateSearch`] and expose it through [`MetaAdapter::as_template`].
//!
//! # Example
//!
//! ```rust
//! use anyhow::Result;
//! use async_trait::async_trait;
//! use meta_gateway_core::{ConnectionStatus, MetaAdapter, MetaResult};
//!
//! pub struct GlossaryAdapter {
//!     terms: Vec<(String, String)>,
//! }
//!
//! #[async_trait]
//! impl MetaAdapter for GlossaryAdapter {
//!     fn name(&self) -> &str { "glossary" }
//!     fn kind(&self) -> &str { "custom" }
//!
//!     async fn search(&self, query: &str) -> Result<Vec<MetaResult>> {
//!         let q = query.to_lowercase();
//!         Ok(self
//!             .terms
//!             .iter()
//!             .filter(|(logical, _)| logical.to_lowercase().contains(&q))
//!             .map(|(logical, physical)| MetaResult::new("glossary", logical, physical, "TERM"))
//!             .collect())
//!     }
//!
//!     async fn test_connection(&self) -> ConnectionStatus {
//!         ConnectionStatus::ok()
//!     }
//! }
//! ```

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::models::{ConnectionStatus, MetaResult};

/// A metadata backend that can be searched and health-checked.
///
/// # Failure semantics
///
/// [`search`](MetaAdapter::search) must return `Err` on any internal
/// failure (network, auth, malformed data). `Ok(vec![])` means the backend
/// answered and nothing matched. The gateway relies on that distinction to
/// report per-source health.
///
/// [`test_connection`](MetaAdapter::test_connection) never fails past this
/// boundary: failures are folded into [`ConnectionStatus::failed`].
///
/// Adapters holding pooled resources acquire them per call and release them
/// before returning, on every exit path. The gateway never manages backend
/// resources itself.
#[async_trait]
pub trait MetaAdapter: Send + Sync {
    /// Stable instance name used for source filtering and reporting
    /// (e.g. `"postgres"`, `"elasticsearch"`, `"vector"`).
    fn name(&self) -> &str;

    /// Backend kind (e.g. `"postgres"`, `"sqlite"`, `"elasticsearch"`, `"static"`).
    fn kind(&self) -> &str {
        "custom"
    }

    /// Run a read-only search for `query` using the backend's own matching
    /// semantics.
    async fn search(&self, query: &str) -> Result<Vec<MetaResult>>;

    /// Lightweight reachability/auth check. Must not mutate backend state.
    async fn test_connection(&self) -> ConnectionStatus;

    /// The templated-query extension, if this backend supports one.
    fn as_template(&self) -> Option<&dyn TemplateSearch> {
        None
    }
}

/// Backend-specific templated query mode.
///
/// Only reachable through the template passthrough; the fan-out search
/// never calls it generically.
#[async_trait]
pub trait TemplateSearch: Send + Sync {
    /// Run the stored template `template_id` with `params` and return its
    /// matches unmodified.
    async fn search_by_template(
        &self,
        template_id: &str,
        params: &Map<String, Value>,
    ) -> Result<Vec<MetaResult>>;
}
