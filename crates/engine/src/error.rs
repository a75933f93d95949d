//! Error types for attune-engine.
//!
//! Wraps the component errors so callers handle a single type.

use attune_energy::EnergyError;
use attune_lexicon::LexiconError;
use attune_ontology::OntologyError;
use attune_resilience::ResilienceError;

/// Errors raised while building an engine.
///
/// Evaluation itself never fails; every variant here is a load-time error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file extension is neither YAML nor JSON.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The YAML config could not be parsed.
    #[error("malformed YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON config could not be parsed.
    #[error("malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// A config field failed validation.
    #[error("invalid config: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    /// A configured principle has no matching ontology concept.
    #[error("principle '{0}' is not a concept in the ontology")]
    UnknownPrinciple(String),

    /// Loading the ontology failed.
    #[error("ontology error: {0}")]
    Ontology(#[from] OntologyError),

    /// Loading the emotion lexicon failed.
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// The energy section is invalid.
    #[error("energy error: {0}")]
    Energy(#[from] EnergyError),

    /// The resilience section is invalid.
    #[error("resilience error: {0}")]
    Resilience(#[from] ResilienceError),

    /// The tracing subscriber could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
