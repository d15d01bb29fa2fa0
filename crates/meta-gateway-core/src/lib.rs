//! # Meta Gateway Core
//!
//! Runtime-agnostic logic for Meta Gateway: result models, the adapter
//! trait, the adapter registry, concurrent fan-out search, result
//! aggregation, connection health checks and the template passthrough.
//!
//! This crate contains no tokio, sqlx, HTTP clients, or filesystem I/O.
//! Concrete backends live in the application crate and plug in through
//! [`adapter::MetaAdapter`].
//!
//! ```text
//!               ┌──────────────┐
//!  run_search ─▶│   Gateway    │
//!               └──────┬───────┘
//!                      │ select(filter)
//!               ┌──────▼───────┐
//!               │   Registry   │
//!               └──────┬───────┘
//!          ┌───────────┼───────────┐
//!          ▼           ▼           ▼
//!      adapter A   adapter B   adapter C     (join_all, settle every call)
//!          └───────────┼───────────┘
//!               ┌──────▼───────┐
//!               │  aggregate   │──▶ AggregatedSearchResponse
//!               └──────────────┘
//! ```

pub mod adapter;
pub mod aggregate;
pub mod error;
pub mod gateway;
pub mod health;
pub mod models;
pub mod orchestrator;
pub mod registry;
pub mod template;

#[cfg(test)]
mod testing;

pub use adapter::{MetaAdapter, TemplateSearch};
pub use error::GatewayError;
pub use gateway::Gateway;
pub use models::{
    AggregatedSearchResponse, ConnectionStatus, MetaResult, SourceHealth, SourceReport,
};
pub use registry::AdapterRegistry;
