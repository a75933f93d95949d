//! Error types for attune-resilience.
//!
//! Raised only while building a monitor. Assessment itself is infallible.

/// Errors raised while building a resilience monitor.
#[derive(Debug, thiserror::Error)]
pub enum ResilienceError {
    /// A configuration field failed validation.
    #[error("invalid resilience config: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// A boundary pattern failed to compile.
    #[error("boundary pattern '{name}' failed to compile: {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

pub type ResilienceResult<T> = Result<T, ResilienceError>;

impl ResilienceError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
