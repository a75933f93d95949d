//! Error types for attune-energy.

/// Errors raised while validating energy configuration.
#[derive(Debug, thiserror::Error)]
pub enum EnergyError {
    /// A configuration field failed validation.
    #[error("invalid energy config: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type EnergyResult<T> = Result<T, EnergyError>;

impl EnergyError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
