use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Serialized pattern tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconDocument {
    pub emotions: BTreeMap<String, EmotionSpec>,
    pub complexity_patterns: BTreeMap<String, PatternSpec>,
    pub discrepancy_patterns: BTreeMap<String, PatternSpec>,
    #[serde(default)]
    pub negations: Vec<String>,
    #[serde(default)]
    pub intensity_scale: IntensityScale,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmotionSpec {
    pub patterns: Vec<String>,
    #[serde(default)]
    pub intensity_modifiers: IntensityModifiers,
}

/// Modifier words that raise or lower the intensity of a nearby emotion term.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntensityModifiers {
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub low: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternSpec {
    pub pattern: String,
}

/// Intensity assigned to a detected emotion depending on nearby modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntensityScale {
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_default")]
    pub default: f64,
    #[serde(default = "default_low")]
    pub low: f64,
}

fn default_high() -> f64 {
    0.9
}

fn default_default() -> f64 {
    0.5
}

fn default_low() -> f64 {
    0.2
}

impl Default for IntensityScale {
    fn default() -> Self {
        Self {
            high: default_high(),
            default: default_default(),
            low: default_low(),
        }
    }
}
