//! Exit readiness and band selection.

use attune_scoring_types::{clamp01, EPSILON};
use serde::Serialize;
use tracing::{info, warn};

use crate::boundary::BoundaryGuard;
use crate::config::ResilienceConfig;
use crate::error::ResilienceResult;
use crate::types::{Band, ResilienceState, TriggerReason};

/// Scorer outputs the monitor consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResilienceSignals {
    pub resonance_value: f64,
    pub truth_value: f64,
    /// Margin `truth_value - semantic_integrity_threshold`.
    pub semantic_integrity: f64,
}

/// State carried between assessments. Owned by the engine.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResilienceMemory {
    pub previous_exit_readiness: Option<f64>,
    pub band: Band,
    pub last_trigger_reason: TriggerReason,
}

/// Computes exit readiness. Holds only immutable configuration.
#[derive(Debug, Clone)]
pub struct ResilienceMonitor {
    config: ResilienceConfig,
    guard: BoundaryGuard,
    integrity_threshold: f64,
}

impl ResilienceMonitor {
    /// `integrity_threshold` normalizes the semantic integrity margin and
    /// should match the logic scorer's `semantic_integrity_threshold`.
    pub fn new(config: ResilienceConfig, integrity_threshold: f64) -> ResilienceResult<Self> {
        config.validate()?;
        let guard = BoundaryGuard::new(&config.boundary_patterns)?;
        Ok(Self {
            config,
            guard,
            integrity_threshold,
        })
    }

    pub fn config(&self) -> &ResilienceConfig {
        &self.config
    }

    /// `clamp(1 - resonance / resonance_collapse_threshold)`
    pub fn collapse_signal(&self, resonance_value: f64) -> f64 {
        clamp01(1.0 - resonance_value / self.config.resonance_collapse_threshold)
    }

    /// Mean of the truth-based and integrity-based corruption readings.
    ///
    /// The integrity margin is negative for any truth below the integrity
    /// threshold, so on its own it would flag most everyday text. Both
    /// readings have to be low for corruption to dominate.
    pub fn corruption_signal(&self, truth_value: f64, semantic_integrity: f64) -> f64 {
        let from_truth = clamp01(1.0 - truth_value / self.config.ethical_corruption_threshold);
        let from_integrity =
            clamp01(-semantic_integrity / self.integrity_threshold.max(EPSILON));
        0.5 * (from_truth + from_integrity)
    }

    pub fn band_for(&self, exit_readiness: f64) -> Band {
        let b = self.config.bands;
        if exit_readiness > b.silence_above {
            Band::VoluntarySilence
        } else if exit_readiness >= b.cautionary_from {
            Band::Cautionary
        } else {
            Band::Active
        }
    }

    /// Recompute exit readiness for one evaluation and update `memory`.
    pub fn assess(
        &self,
        memory: &mut ResilienceMemory,
        signals: ResilienceSignals,
        text: &str,
    ) -> ResilienceState {
        let collapse = self.collapse_signal(signals.resonance_value);
        let corruption = self.corruption_signal(signals.truth_value, signals.semantic_integrity);

        let weighted_collapse = self.config.collapse_weight * collapse;
        let weighted_corruption = self.config.corruption_weight * corruption;
        let mut exit_readiness = clamp01(weighted_collapse + weighted_corruption);

        if let (Some(alpha), Some(prev)) = (self.config.smoothing_alpha, memory.previous_exit_readiness) {
            exit_readiness = clamp01(alpha * exit_readiness + (1.0 - alpha) * prev);
        }

        let boundary_matches = self.guard.matches(text);
        let mut reason = if exit_readiness <= 0.0 {
            TriggerReason::None
        } else if weighted_collapse >= weighted_corruption {
            TriggerReason::ResonanceCollapse
        } else {
            TriggerReason::EthicalCorruption
        };
        if !boundary_matches.is_empty() {
            exit_readiness = exit_readiness.max(self.config.boundary_floor);
            reason = TriggerReason::BoundaryViolation;
        }

        let band = self.band_for(exit_readiness);
        if band != memory.band {
            info!(from = %memory.band, to = %band, exit_readiness, "resilience band changed");
        }
        if band == Band::VoluntarySilence {
            warn!(
                exit_readiness,
                reason = ?reason,
                boundaries = ?boundary_matches,
                "voluntary silence"
            );
        }

        memory.previous_exit_readiness = Some(exit_readiness);
        memory.band = band;
        memory.last_trigger_reason = reason;

        ResilienceState {
            exit_readiness,
            band,
            last_trigger_reason: reason,
            collapse_signal: collapse,
            corruption_signal: corruption,
            boundary_matches,
        }
    }
}
