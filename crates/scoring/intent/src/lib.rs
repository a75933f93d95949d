#![deny(unsafe_code)]
//! # attune-intent
//!
//! Scores the intent of an utterance against the concept ontology.
//!
//! [`IntentScorer::analyze`] produces an [`IntentResult`] with:
//!
//! - `coherence`: relation density, structure and length
//! - `freedom_degree`: imperative, restrictive and open-ended phrasing
//! - `resonance_value`: alignment with the weighted ethics-priority table
//! - `action_suitability`: whether the intent is clear and aligned enough to act on
//!
//! Scoring is pure: the scorer only reads the shared ontology and the input.

pub mod config;
pub mod result;
pub mod scorer;

pub use config::{CoherenceWeights, FreedomConfig, IntentConfig};
pub use result::IntentResult;
pub use scorer::IntentScorer;
