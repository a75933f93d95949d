use serde::{Deserialize, Serialize};

/// Logic scorer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogicConfig {
    /// Truth below this raises a `TruthBelowThreshold` advisory.
    pub truth_threshold: f64,

    /// Reference point for the semantic integrity margin.
    pub semantic_integrity_threshold: f64,

    pub truth_weights: TruthWeights,
    pub depth_weights: DepthWeights,
    pub discrepancy_weights: DiscrepancyWeights,
}

impl Default for LogicConfig {
    fn default() -> Self {
        Self {
            truth_threshold: 0.6,
            semantic_integrity_threshold: 0.75,
            truth_weights: TruthWeights::default(),
            depth_weights: DepthWeights::default(),
            discrepancy_weights: DiscrepancyWeights::default(),
        }
    }
}

/// `truth = coherence*c + (1-uncertainty)*u + temporal*t + depth*d - discrepancy*x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TruthWeights {
    pub coherence: f64,
    pub certainty: f64,
    pub temporal: f64,
    pub depth: f64,
    pub discrepancy: f64,
}

impl Default for TruthWeights {
    fn default() -> Self {
        Self {
            coherence: 0.3,
            certainty: 0.2,
            temporal: 0.2,
            depth: 0.2,
            discrepancy: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepthWeights {
    pub variety: f64,
    pub intensity: f64,
    pub complexity: f64,
}

impl Default for DepthWeights {
    fn default() -> Self {
        Self {
            variety: 0.4,
            intensity: 0.3,
            complexity: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscrepancyWeights {
    pub ratio: f64,
    pub emotion_mismatch: f64,
    pub negation_with_positive: f64,
}

impl Default for DiscrepancyWeights {
    fn default() -> Self {
        Self {
            ratio: 0.4,
            emotion_mismatch: 0.3,
            negation_with_positive: 0.3,
        }
    }
}
