//! The entry points exposed to the protocol layer.
//!
//! A [`Gateway`] wraps the shared, immutable [`AdapterRegistry`] and offers
//! the three caller-facing operations: fan-out search, template
//! passthrough, and health check. It is cheap to clone.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::GatewayError;
use crate::health::check_connections;
use crate::models::{AggregatedSearchResponse, MetaResult, SourceHealth};
use crate::orchestrator::search_registry;
use crate::registry::AdapterRegistry;
use crate::template::{template_search, DEFAULT_TEMPLATE_ADAPTER};

#[derive(Clone)]
pub struct Gateway {
    registry: Arc<AdapterRegistry>,
    template_adapter: String,
}

impl Gateway {
    /// Create a gateway over `registry`. Template queries go to the
    /// `"elasticsearch"` adapter.
    pub fn new(registry: Arc<AdapterRegistry>) -> Self {
        Self {
            registry,
            template_adapter: DEFAULT_TEMPLATE_ADAPTER.to_string(),
        }
    }

    /// Route template queries to the adapter named `name` instead.
    pub fn with_template_adapter(mut self, name: impl Into<String>) -> Self {
        self.template_adapter = name.into();
        self
    }

    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    pub fn template_adapter(&self) -> &str {
        &self.template_adapter
    }

    /// Search every adapter selected by `filter` and merge the results.
    ///
    /// A blank `filter` is treated as unset (`"all"`). The only error is an
    /// empty query; adapter failures are reported inside the response.
    pub async fn run_search(
        &self,
        query: &str,
        filter: Option<&str>,
    ) -> Result<AggregatedSearchResponse, GatewayError> {
        if query.trim().is_empty() {
            return Err(GatewayError::EmptyQuery);
        }
        let filter = filter.map(str::trim).filter(|f| !f.is_empty());
        Ok(search_registry(&self.registry, query, filter).await)
    }

    /// Run a stored template on the template-capable adapter.
    pub async fn run_template_search(
        &self,
        template_id: &str,
        params: &Map<String, Value>,
    ) -> Result<Vec<MetaResult>, GatewayError> {
        template_search(&self.registry, &self.template_adapter, template_id, params).await
    }

    /// Check connectivity of every configured adapter.
    pub async fn run_health_check(&self) -> Vec<SourceHealth> {
        check_connections(&self.registry).await
    }
}
