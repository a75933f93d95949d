//! Folding non-text modality features into coherence and resonance.
//!
//! Feature extraction happens upstream; the engine only receives numbers.
//! Modalities are compared pairwise and their mean agreement nudges the
//! text scores by configurable weights.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualFeatures {
    /// Mean brightness in [0, 1].
    pub brightness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    /// Mean normalized amplitude in [0, 1].
    pub amplitude: f64,
}

/// Input of [`crate::Engine::evaluate_multimodal`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultimodalInput {
    pub text: Option<String>,
    pub visual: Option<VisualFeatures>,
    pub audio: Option<AudioFeatures>,
    /// Named sensor readings, e.g. `light`, `temperature`, `humidity`.
    #[serde(default)]
    pub sensors: BTreeMap<String, f64>,
}

impl MultimodalInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_visual(mut self, brightness: f64) -> Self {
        self.visual = Some(VisualFeatures { brightness });
        self
    }

    pub fn with_audio(mut self, amplitude: f64) -> Self {
        self.audio = Some(AudioFeatures { amplitude });
        self
    }

    pub fn with_sensor(mut self, name: impl Into<String>, value: f64) -> Self {
        self.sensors.insert(name.into(), value);
        self
    }
}

/// Inclusive accepted range of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorRange {
    pub min: f64,
    pub max: f64,
}

impl SensorRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FusionConfig {
    /// Share of fused coherence taken from modality agreement.
    pub coherence_weight: f64,
    /// Share of fused resonance taken from modality agreement.
    pub resonance_weight: f64,
    /// Agreement assumed when no two modalities can be compared.
    pub neutral_agreement: f64,
    /// Light reading that maps to full brightness.
    pub light_full_scale: f64,
    /// Accepted sensor ranges; sensors without an entry are accepted as-is.
    pub sensor_ranges: BTreeMap<String, SensorRange>,
}

impl Default for FusionConfig {
    fn default() -> Self {
        let sensor_ranges = [
            ("light", SensorRange { min: 0.0, max: 10_000.0 }),
            ("temperature", SensorRange { min: -50.0, max: 60.0 }),
            ("humidity", SensorRange { min: 0.0, max: 100.0 }),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            coherence_weight: 0.2,
            resonance_weight: 0.1,
            neutral_agreement: 0.5,
            light_full_scale: 100.0,
            sensor_ranges,
        }
    }
}

impl FusionConfig {
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("fusion.coherence_weight", self.coherence_weight),
            ("fusion.resonance_weight", self.resonance_weight),
            ("fusion.neutral_agreement", self.neutral_agreement),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::invalid(field, format!("{value} outside [0, 1]")));
            }
        }
        if !(self.light_full_scale > 0.0) {
            return Err(EngineError::invalid("fusion.light_full_scale", "must be > 0"));
        }
        for (name, range) in &self.sensor_ranges {
            if !(range.min <= range.max) {
                return Err(EngineError::invalid(
                    format!("fusion.sensor_ranges.{name}"),
                    "min must not exceed max",
                ));
            }
        }
        Ok(())
    }
}

/// How the modalities were folded into the text scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalityReport {
    pub agreement: f64,
    /// Pairwise correlations, e.g. `brightness_amplitude`.
    pub correlations: BTreeMap<String, f64>,
    pub accepted_sensors: BTreeMap<String, f64>,
    /// Names of features dropped as out of range.
    pub dropped: Vec<String>,
    pub coherence_before: f64,
    pub coherence_after: f64,
    pub resonance_before: f64,
    pub resonance_after: f64,
}

/// Pure fusion of modality features with text scores.
#[derive(Debug, Clone)]
pub struct ModalityFusion<'a> {
    config: &'a FusionConfig,
}

fn unit_feature(name: &str, value: f64, dropped: &mut Vec<String>) -> Option<f64> {
    if (0.0..=1.0).contains(&value) {
        Some(value)
    } else {
        warn!(feature = name, value, "modality feature out of range, dropped");
        dropped.push(name.to_string());
        None
    }
}

impl<'a> ModalityFusion<'a> {
    pub fn new(config: &'a FusionConfig) -> Self {
        Self { config }
    }

    pub fn fuse(&self, input: &MultimodalInput, coherence: f64, resonance: f64) -> ModalityReport {
        let mut dropped = Vec::new();

        let brightness = input
            .visual
            .and_then(|v| unit_feature("brightness", v.brightness, &mut dropped));
        let amplitude = input
            .audio
            .and_then(|a| unit_feature("amplitude", a.amplitude, &mut dropped));

        let mut accepted_sensors = BTreeMap::new();
        for (name, &value) in &input.sensors {
            let in_range = value.is_finite()
                && self
                    .config
                    .sensor_ranges
                    .get(name)
                    .map_or(true, |r| r.contains(value));
            if in_range {
                accepted_sensors.insert(name.clone(), value);
            } else {
                warn!(sensor = %name, value, "sensor reading out of range, dropped");
                dropped.push(name.clone());
            }
        }

        let mut correlations = BTreeMap::new();
        if let (Some(b), Some(a)) = (brightness, amplitude) {
            correlations.insert("brightness_amplitude".to_string(), 1.0 - (b - a).abs());
        }
        if let (Some(b), Some(light)) = (brightness, accepted_sensors.get("light")) {
            let normalized = (light / self.config.light_full_scale).clamp(0.0, 1.0);
            correlations.insert("brightness_light".to_string(), 1.0 - (b - normalized).abs());
        }

        let agreement = if correlations.is_empty() {
            self.config.neutral_agreement
        } else {
            correlations.values().sum::<f64>() / correlations.len() as f64
        };

        let wc = self.config.coherence_weight;
        let wr = self.config.resonance_weight;
        ModalityReport {
            agreement,
            correlations,
            accepted_sensors,
            dropped,
            coherence_before: coherence,
            coherence_after: (1.0 - wc) * coherence + wc * agreement,
            resonance_before: resonance,
            resonance_after: (1.0 - wr) * resonance + wr * agreement,
        }
    }
}
