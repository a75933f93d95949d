#![deny(unsafe_code)]
//! # attune-logic
//!
//! Logic scoring: emotional depth, discrepancy, certainty and temporal
//! grounding, combined with intent coherence into a clamped truth value.
//!
//! Uncertainty and temporal confidence are computed by [`MarkerScorer`]
//! implementations so callers can swap in their own sub-scorers.

pub mod config;
pub mod markers;
pub mod result;
pub mod scorer;

pub use config::{DepthWeights, DiscrepancyWeights, LogicConfig, TruthWeights};
pub use markers::{MarkerScore, MarkerScorer, TemporalScorer, UncertaintyScorer};
pub use result::{Discrepancy, EmotionalDepth, LogicResult};
pub use scorer::LogicScorer;
