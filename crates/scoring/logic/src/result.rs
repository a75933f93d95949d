use std::collections::{BTreeMap, BTreeSet};

use attune_lexicon::{ComplexityPattern, DiscrepancyKind, Emotion};
use attune_scoring_types::{Advisory, CalculationDetails};
use serde::Serialize;

/// Emotional depth breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionalDepth {
    pub variety: f64,
    pub intensity: f64,
    pub complexity: f64,
    pub depth_score: f64,
    /// Detected emotions with their intensity.
    pub emotions: BTreeMap<Emotion, f64>,
    pub complexity_patterns: BTreeSet<ComplexityPattern>,
}

/// Discrepancy breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discrepancy {
    pub ratio: f64,
    pub emotion_mismatch: f64,
    pub negation_with_positive: f64,
    pub discrepancy_score: f64,
    pub kinds: BTreeSet<DiscrepancyKind>,
}

/// Output of [`crate::LogicScorer::evaluate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogicResult {
    /// Clamped to [0, 1]. The underlying weighted sum can leave that range,
    /// so values at either bound carry less information than interior ones.
    pub truth_value: f64,
    /// `truth_value - semantic_integrity_threshold`; negative means short.
    pub semantic_integrity: f64,
    pub uncertainty: f64,
    pub temporal_confidence: f64,
    pub temporal_orientation: Option<String>,
    pub emotional_depth: EmotionalDepth,
    pub discrepancy: Discrepancy,
    pub advisories: Vec<Advisory>,
    pub calculation_details: CalculationDetails,
}
