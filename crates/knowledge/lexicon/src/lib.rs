#![deny(unsafe_code)]
//! # attune-lexicon
//!
//! Emotion, complexity and discrepancy pattern tables.
//!
//! Pattern documents are keyed by name; on load every name is mapped onto a
//! closed enum and every pattern is compiled once. Matching afterwards is a
//! pure function from text to a set of enum values.
//!
//! ## Key Types
//!
//! - [`EmotionLexicon`]: compiled, immutable pattern tables
//! - [`Emotion`], [`ComplexityPattern`], [`DiscrepancyKind`]: closed name sets
//! - [`EmotionMatch`]: per-emotion hit count and intensity
//! - [`LexiconDocument`]: serialized form of the tables

pub mod document;
pub mod error;
pub mod kinds;
pub mod lexicon;

pub use document::{EmotionSpec, IntensityModifiers, IntensityScale, LexiconDocument, PatternSpec};
pub use error::{LexiconError, LexiconResult};
pub use kinds::{ComplexityPattern, DiscrepancyKind, Emotion, Valence};
pub use lexicon::{EmotionLexicon, EmotionMatch};
