use serde::{Deserialize, Serialize};

use crate::error::{ResilienceError, ResilienceResult};

/// Resilience monitor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResilienceConfig {
    /// Resonance below this starts the collapse signal.
    pub resonance_collapse_threshold: f64,
    /// Truth below this starts the corruption signal.
    pub ethical_corruption_threshold: f64,
    pub collapse_weight: f64,
    pub corruption_weight: f64,
    pub bands: BandConfig,
    /// Exit readiness is raised to at least this when a boundary pattern
    /// matches. The default sits at the top of the cautionary band, so a
    /// match on its own warns and healthy text is not silenced.
    pub boundary_floor: f64,
    pub boundary_patterns: Vec<BoundaryPattern>,
    /// Exponential smoothing factor in (0, 1]; `None` disables smoothing.
    pub smoothing_alpha: Option<f64>,
}

impl Default for ResilienceConfig {
    fn default() -> Self {
        Self {
            resonance_collapse_threshold: 0.3,
            ethical_corruption_threshold: 0.4,
            collapse_weight: 0.5,
            corruption_weight: 0.5,
            bands: BandConfig::default(),
            boundary_floor: 0.7,
            boundary_patterns: BoundaryPattern::defaults(),
            smoothing_alpha: None,
        }
    }
}

impl ResilienceConfig {
    pub fn validate(&self) -> ResilienceResult<()> {
        if !(self.resonance_collapse_threshold > 0.0) {
            return Err(ResilienceError::invalid(
                "resonance_collapse_threshold",
                "must be > 0",
            ));
        }
        if !(self.ethical_corruption_threshold > 0.0 && self.ethical_corruption_threshold <= 1.0) {
            return Err(ResilienceError::invalid(
                "ethical_corruption_threshold",
                "must be within (0, 1]",
            ));
        }
        if self.collapse_weight < 0.0 || self.corruption_weight < 0.0 {
            return Err(ResilienceError::invalid("weights", "must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.boundary_floor) {
            return Err(ResilienceError::invalid("boundary_floor", "outside [0, 1]"));
        }
        let b = self.bands;
        if !(0.0 < b.cautionary_from && b.cautionary_from <= b.silence_above && b.silence_above < 1.0) {
            return Err(ResilienceError::invalid(
                "bands",
                "require 0 < cautionary_from <= silence_above < 1",
            ));
        }
        if let Some(alpha) = self.smoothing_alpha {
            if !(alpha > 0.0 && alpha <= 1.0) {
                return Err(ResilienceError::invalid("smoothing_alpha", "must be within (0, 1]"));
            }
        }
        Ok(())
    }
}

/// Band boundaries over exit readiness.
///
/// `[0, cautionary_from)` is active, `[cautionary_from, silence_above]` is
/// cautionary and anything above `silence_above` is voluntary silence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandConfig {
    pub cautionary_from: f64,
    pub silence_above: f64,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            cautionary_from: 0.3,
            silence_above: 0.7,
        }
    }
}

/// Named, case-insensitive boundary pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundaryPattern {
    pub name: String,
    pub pattern: String,
}

impl BoundaryPattern {
    fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "harm",
                r"\b(?:hack|exploit|attack|destroy|harm|hurt|kill|damage)\b",
            ),
            Self::new("illegality", r"\b(?:illegal|unlawful|criminal)\b"),
            Self::new(
                "safety_bypass",
                r"\b(?:bypass|circumvent|evade|avoid) (?:security|protection|safety|ethics|limits)\b",
            ),
            Self::new(
                "manipulation",
                r"\b(?:manipulate|deceive|trick|fool) (?:humans?|persons?|people|users?|systems?)\b",
            ),
            Self::new(
                "ethics_override",
                r"\b(?:ignore|override|disable) (?:ethics|rules|limitations|constraints|boundaries)\b",
            ),
        ]
    }
}
