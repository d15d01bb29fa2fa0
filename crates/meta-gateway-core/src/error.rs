//! Errors surfaced by the gateway entry points.
//!
//! Adapter failures during fan-out never show up here: they are folded into
//! per-source reports. These variants cover the few outcomes that a caller
//! must see as a failed request.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("query must not be empty")]
    EmptyQuery,

    /// The named template-capable adapter is not configured, or does not
    /// support templated queries.
    #[error("{0} adapter not configured for template search")]
    TemplateAdapterMissing(String),

    #[error("template_id must not be empty")]
    EmptyTemplateId,

    /// A single targeted adapter call failed (template passthrough only).
    #[error("{adapter}: {message}")]
    Adapter { adapter: String, message: String },
}

impl GatewayError {
    /// True for errors caused by missing configuration rather than a
    /// failing backend.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::TemplateAdapterMissing(_))
    }
}
