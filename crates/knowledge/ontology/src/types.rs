use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Identifier of a concept, e.g. `truth` or `self_limitation`.
pub type ConceptId = String;

/// A concept as it appears in the serialized document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConceptSpec {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub related: Vec<ConceptId>,
}

/// A loaded concept. Surface forms are lowercased on load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Concept {
    pub id: ConceptId,
    pub description: String,
    pub synonyms: BTreeSet<String>,
    pub antonyms: BTreeSet<String>,
    pub related: BTreeSet<ConceptId>,
}

impl Concept {
    pub(crate) fn from_spec(id: &str, spec: ConceptSpec) -> Self {
        Self {
            id: id.to_string(),
            description: spec.description,
            synonyms: spec.synonyms.iter().map(|s| s.to_lowercase()).collect(),
            antonyms: spec.antonyms.iter().map(|s| s.to_lowercase()).collect(),
            related: spec.related.into_iter().collect(),
        }
    }

    /// True if any of `tokens` is one of this concept's synonyms.
    pub fn matches_any<'a, I>(&self, tokens: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens.into_iter().any(|t| self.synonyms.contains(t))
    }
}

/// A weighted, directed relation between two concepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Relation {
    pub subject: ConceptId,
    pub predicate: String,
    pub object: ConceptId,
    pub weight: f64,
    #[serde(default)]
    pub description: String,
}

/// On-disk ontology document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OntologyDocument {
    #[serde(default)]
    pub concepts: BTreeMap<ConceptId, ConceptSpec>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}
