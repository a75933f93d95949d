//! Engine configuration.
//!
//! One typed tree per component, composed into [`EngineConfig`]. Every
//! section has documented defaults, so an empty document is a valid config.
//! Unknown keys are rejected at parse time and ranges are checked by
//! [`EngineConfig::validate`].

use std::path::{Path, PathBuf};

use attune_energy::EnergyConfig;
use attune_intent::IntentConfig;
use attune_logic::LogicConfig;
use attune_resilience::ResilienceConfig;
use attune_scoring_types::Locale;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::multimodal::FusionConfig;
use crate::telemetry::LoggingConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Language of the marker word tables.
    pub locale: Locale,

    /// Ontology document; the built-in ontology when unset.
    pub ontology_path: Option<PathBuf>,

    /// Emotion pattern document; the built-in tables when unset.
    pub patterns_path: Option<PathBuf>,

    pub intent: IntentConfig,
    pub logic: LogicConfig,
    pub energy: EnergyConfig,
    pub resilience: ResilienceConfig,
    pub fusion: FusionConfig,
    pub logging: LoggingConfig,
}

fn check_unit(field: &str, value: f64) -> EngineResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::invalid(field, format!("{value} outside [0, 1]")))
    }
}

impl EngineConfig {
    pub fn from_yaml_str(raw: &str) -> EngineResult<Self> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let config = match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&raw)?,
            "json" => Self::from_json_str(&raw)?,
            other => return Err(EngineError::UnsupportedFormat(other.to_string())),
        };
        info!(path = %path.display(), "engine config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        let intent = &self.intent;
        check_unit("intent.threshold", intent.threshold)?;
        check_unit("intent.coherence_threshold", intent.coherence_threshold)?;
        check_unit("intent.resonance_minimum", intent.resonance_minimum)?;
        if !(intent.connector_reference > 0.0) {
            return Err(EngineError::invalid("intent.connector_reference", "must be > 0"));
        }
        if intent.principles.is_empty() {
            return Err(EngineError::invalid("intent.principles", "must not be empty"));
        }
        for (name, weight) in &intent.principles {
            if !(*weight >= 0.0 && weight.is_finite()) {
                return Err(EngineError::invalid(
                    format!("intent.principles.{name}"),
                    "weight must be >= 0",
                ));
            }
        }

        check_unit("logic.truth_threshold", self.logic.truth_threshold)?;
        check_unit(
            "logic.semantic_integrity_threshold",
            self.logic.semantic_integrity_threshold,
        )?;
        if self.logic.semantic_integrity_threshold <= 0.0 {
            return Err(EngineError::invalid(
                "logic.semantic_integrity_threshold",
                "must be > 0",
            ));
        }

        self.energy.validate()?;
        self.resilience.validate()?;
        self.fusion.validate()?;
        Ok(())
    }
}
