#![deny(unsafe_code)]
//! # attune-ontology
//!
//! Read-only concept ontology used by the intent scorer.
//!
//! The graph holds concepts (synonyms, antonyms, related concept ids) and
//! weighted directed relations between them. It is loaded once, validated,
//! and then shared behind an `Arc` by every concurrent evaluation.
//!
//! ## Key Types
//!
//! - [`OntologyGraph`]: Validated, immutable graph with token-set queries
//! - [`Concept`]: A concept with its lexical surface forms
//! - [`Relation`]: A weighted `subject -predicate-> object` edge
//! - [`OntologyDocument`]: Serialized form of the knowledge base

pub mod error;
pub mod graph;
pub mod types;

pub use error::{OntologyError, OntologyResult};
pub use graph::OntologyGraph;
pub use types::{Concept, ConceptId, ConceptSpec, OntologyDocument, Relation};
