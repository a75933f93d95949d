use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Intent scorer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntentConfig {
    /// action_suitability must exceed this for the intent to be actionable.
    pub threshold: f64,

    /// Coherence below this raises a `LowCoherence` advisory.
    pub coherence_threshold: f64,

    /// Resonance below this raises a `BelowResonanceMinimum` advisory.
    pub resonance_minimum: f64,

    /// Ethics-priority table: ontology concept id -> weight.
    pub principles: BTreeMap<String, f64>,

    /// Connector count at which the connector factor saturates.
    pub connector_reference: f64,

    pub coherence_weights: CoherenceWeights,

    pub freedom: FreedomConfig,
}

impl Default for IntentConfig {
    fn default() -> Self {
        let principles = [
            ("truth", 0.2),
            ("meaning", 0.2),
            ("self_limitation", 0.2),
            ("resonance", 0.2),
            ("voluntary_silence", 0.1),
            ("energy_justice", 0.1),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            threshold: 0.7,
            coherence_threshold: 0.3,
            resonance_minimum: 0.6,
            principles,
            connector_reference: 3.0,
            coherence_weights: CoherenceWeights::default(),
            freedom: FreedomConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoherenceWeights {
    pub relation: f64,
    pub structure: f64,
    pub length: f64,
}

impl Default for CoherenceWeights {
    fn default() -> Self {
        Self {
            relation: 0.4,
            structure: 0.3,
            length: 0.3,
        }
    }
}

/// Weights and scales of the freedom sub-formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FreedomConfig {
    pub imperative_weight: f64,
    pub restrictive_weight: f64,
    pub open_weight: f64,
    /// Imperative factor when the input opens with an imperative verb.
    pub imperative_factor: f64,
    pub restrictive_scale: f64,
    pub open_base: f64,
    pub open_scale: f64,
}

impl Default for FreedomConfig {
    fn default() -> Self {
        Self {
            imperative_weight: 0.35,
            restrictive_weight: 0.35,
            open_weight: 0.3,
            imperative_factor: 0.3,
            restrictive_scale: 5.0,
            open_base: 0.7,
            open_scale: 3.0,
        }
    }
}
