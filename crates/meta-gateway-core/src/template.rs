//! Direct passthrough to one adapter's templated query mode.
//!
//! Bypasses the fan-out entirely: exactly one backend is targeted and its
//! results are returned unmodified.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::GatewayError;
use crate::models::MetaResult;
use crate::orchestrator::settle;
use crate::registry::AdapterRegistry;

/// Adapter name that serves template queries unless configured otherwise.
pub const DEFAULT_TEMPLATE_ADAPTER: &str = "elasticsearch";

/// Forward `template_id` and `params` to the template-capable adapter named
/// `adapter_name`.
///
/// Returns [`GatewayError::TemplateAdapterMissing`] without calling any
/// backend when that adapter is absent or has no template mode.
pub async fn template_search(
    registry: &AdapterRegistry,
    adapter_name: &str,
    template_id: &str,
    params: &Map<String, Value>,
) -> Result<Vec<MetaResult>, GatewayError> {
    if template_id.trim().is_empty() {
        return Err(GatewayError::EmptyTemplateId);
    }

    let template = registry
        .by_name(adapter_name)
        .and_then(|adapter| adapter.as_template())
        .ok_or_else(|| GatewayError::TemplateAdapterMissing(adapter_name.to_string()))?;

    debug!(adapter = adapter_name, template_id, "running template search");

    match settle(template.search_by_template(template_id, params)).await {
        Ok(Ok(results)) => Ok(results),
        Ok(Err(e)) => Err(GatewayError::Adapter {
            adapter: adapter_name.to_string(),
            message: format!("{:#}", e),
        }),
        Err(msg) => Err(GatewayError::Adapter {
            adapter: adapter_name.to_string(),
            message: format!("adapter panicked: {}", msg),
        }),
    }
}
