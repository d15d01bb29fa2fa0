//! Connection health checks across every configured adapter.
//!
//! Same settle-all shape as the search fan-out, but there is no source
//! filter: every adapter in the registry is checked, every time.

use futures::future::join_all;
use tracing::warn;

use crate::models::{ConnectionStatus, SourceHealth};
use crate::orchestrator::settle;
use crate::registry::AdapterRegistry;

/// Reported for a failed check that came back without a message.
const CHECK_FAILED: &str = "connection check failed";

/// Run `test_connection` on every adapter concurrently.
///
/// Returns one entry per configured adapter, in registry order. A panicking
/// check is reported as a failed status instead of aborting the others.
pub async fn check_connections(registry: &AdapterRegistry) -> Vec<SourceHealth> {
    let checks = registry.all().into_iter().map(|adapter| async move {
        let name = adapter.name().to_string();
        let mut status = match settle(adapter.test_connection()).await {
            Ok(status) => status,
            Err(msg) => ConnectionStatus::failed(format!("connection check panicked: {}", msg)),
        };
        if !status.ok && status.error.as_deref().map_or(true, |e| e.trim().is_empty()) {
            status = ConnectionStatus::failed(CHECK_FAILED);
        }
        if let Some(err) = &status.error {
            warn!(adapter = %name, error = %err, "connection check failed");
        }
        SourceHealth { name, status }
    });

    join_all(checks).await
}
