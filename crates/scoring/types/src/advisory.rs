use serde::{Deserialize, Serialize};

/// A non-fatal observation attached to a scoring result.
///
/// Advisories never abort an evaluation; they tell downstream consumers that
/// a score fell short of a configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// coherence < coherence_threshold
    LowCoherence,
    /// resonance_value < resonance_minimum
    BelowResonanceMinimum,
    /// action_suitability did not exceed the intent threshold
    NotActionable,
    /// truth_value < truth_threshold
    TruthBelowThreshold,
}
