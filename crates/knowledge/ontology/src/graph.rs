//! Immutable concept graph.
//!
//! Built once from an ontology document and shared behind an `Arc`. Synonym
//! and antonym lookups go through inverted indexes, so scoring a token is a
//! hash lookup rather than a scan over concepts.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{OntologyError, OntologyResult};
use crate::types::{Concept, ConceptId, OntologyDocument, Relation};

const BUILTIN_ONTOLOGY: &str = include_str!("../data/ontology.json");

/// Immutable concept graph.
///
/// Relations keep the order in which they appear in the source document so
/// that query results are reproducible. Nothing here is mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct OntologyGraph {
    concepts: BTreeMap<ConceptId, Concept>,
    relations: Vec<Relation>,
    /// synonym -> ids of concepts carrying it
    synonym_index: HashMap<String, Vec<ConceptId>>,
    antonyms: BTreeSet<String>,
}

impl OntologyGraph {
    /// The English ontology shipped with this crate.
    pub fn builtin() -> OntologyResult<Self> {
        Self::from_json_str(BUILTIN_ONTOLOGY)
    }

    pub fn from_json_str(json: &str) -> OntologyResult<Self> {
        let doc: OntologyDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Read and validate an ontology document from disk.
    pub fn load(path: impl AsRef<Path>) -> OntologyResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| OntologyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let graph = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            concepts = graph.concepts.len(),
            relations = graph.relations.len(),
            "ontology loaded"
        );
        Ok(graph)
    }

    pub fn from_document(doc: OntologyDocument) -> OntologyResult<Self> {
        let concepts: BTreeMap<ConceptId, Concept> = doc
            .concepts
            .into_iter()
            .map(|(id, spec)| {
                let concept = Concept::from_spec(&id, spec);
                (id, concept)
            })
            .collect();

        for concept in concepts.values() {
            if concept.synonyms.is_empty() {
                return Err(OntologyError::EmptySynonyms(concept.id.clone()));
            }
            if let Some(missing) = concept.related.iter().find(|r| !concepts.contains_key(*r)) {
                return Err(OntologyError::UnknownRelated {
                    concept: concept.id.clone(),
                    related: missing.clone(),
                });
            }
        }

        for (index, rel) in doc.relations.iter().enumerate() {
            for end in [&rel.subject, &rel.object] {
                if !concepts.contains_key(end) {
                    return Err(OntologyError::UnknownRelationConcept {
                        index,
                        concept: end.clone(),
                    });
                }
            }
            if !(0.0..=1.0).contains(&rel.weight) || rel.weight.is_nan() {
                return Err(OntologyError::WeightOutOfRange {
                    index,
                    weight: rel.weight,
                });
            }
        }

        let mut synonym_index: HashMap<String, Vec<ConceptId>> = HashMap::new();
        let mut antonyms = BTreeSet::new();
        for concept in concepts.values() {
            for syn in &concept.synonyms {
                synonym_index
                    .entry(syn.clone())
                    .or_default()
                    .push(concept.id.clone());
            }
            antonyms.extend(concept.antonyms.iter().cloned());
        }

        debug!(
            concepts = concepts.len(),
            relations = doc.relations.len(),
            "ontology validated"
        );

        Ok(Self {
            concepts,
            relations: doc.relations,
            synonym_index,
            antonyms,
        })
    }

    pub fn concept(&self, id: &str) -> Option<&Concept> {
        self.concepts.get(id)
    }

    pub fn concepts(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.values()
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Concepts whose synonym set intersects `tokens`, in id order.
    pub fn concepts_matching(&self, tokens: &BTreeSet<String>) -> Vec<&Concept> {
        let ids: BTreeSet<&ConceptId> = tokens
            .iter()
            .filter_map(|t| self.synonym_index.get(t))
            .flatten()
            .collect();
        ids.into_iter()
            .filter_map(|id| self.concepts.get(id))
            .collect()
    }

    /// Every relation whose subject or object concept is named by one of
    /// `tokens`, in document order. Unknown tokens simply match nothing.
    pub fn relations_touching(&self, tokens: &BTreeSet<String>) -> Vec<&Relation> {
        let hit: BTreeSet<&str> = self
            .concepts_matching(tokens)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        if hit.is_empty() {
            return Vec::new();
        }
        self.relations
            .iter()
            .filter(|r| hit.contains(r.subject.as_str()) || hit.contains(r.object.as_str()))
            .collect()
    }

    pub fn relation_count(&self, tokens: &BTreeSet<String>) -> usize {
        self.relations_touching(tokens).len()
    }

    /// Number of tokens (with repetition) found in any concept's antonym set.
    pub fn antonym_hits<'a, I>(&self, tokens: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .filter(|t| self.antonyms.contains(*t))
            .count()
    }

    /// Breadth-first walk along `related` links, at most `depth` hops away.
    /// The start concept itself is not included.
    pub fn related(&self, id: &str, depth: usize) -> Vec<&Concept> {
        let Some(start) = self.concepts.get(id) else {
            return Vec::new();
        };
        let mut seen: BTreeSet<&str> = BTreeSet::from([start.id.as_str()]);
        let mut out = Vec::new();
        let mut queue: VecDeque<(&Concept, usize)> = VecDeque::from([(start, 0)]);

        while let Some((concept, hops)) = queue.pop_front() {
            if hops == depth {
                continue;
            }
            for next_id in &concept.related {
                if !seen.insert(next_id.as_str()) {
                    continue;
                }
                if let Some(next) = self.concepts.get(next_id) {
                    out.push(next);
                    queue.push_back((next, hops + 1));
                }
            }
        }
        out
    }
}
