//! Error types for attune-ontology.
//!
//! Every variant is raised at load time; lookups on a built graph never fail.

/// Errors raised while loading an ontology document.
#[derive(Debug, thiserror::Error)]
pub enum OntologyError {
    /// The document is not valid JSON or does not match the schema.
    #[error("malformed ontology document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The ontology file could not be read.
    #[error("failed to read ontology file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A relation names a concept that is not defined.
    #[error("relation {index} references unknown concept '{concept}'")]
    UnknownRelationConcept { index: usize, concept: String },

    /// A relation weight is outside the unit interval.
    #[error("relation {index} weight {weight} outside [0, 1]")]
    WeightOutOfRange { index: usize, weight: f64 },

    /// A concept lists a related concept that is not defined.
    #[error("concept '{concept}' lists unknown related concept '{related}'")]
    UnknownRelated { concept: String, related: String },

    /// A concept would never match any token.
    #[error("concept '{0}' has no synonyms")]
    EmptySynonyms(String),
}

pub type OntologyResult<T> = Result<T, OntologyError>;
