//! Process-wide mutable state, owned by the engine behind one lock.

use attune_energy::{EnergyLedger, ProfileChange, ProfileKind};
use attune_resilience::{Band, ResilienceMemory, TriggerReason};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pub energy: EnergyLedger,
    pub resilience: ResilienceMemory,
}

impl EngineState {
    pub fn new(initial_profile: ProfileKind) -> Self {
        Self {
            energy: EnergyLedger::new(initial_profile),
            resilience: ResilienceMemory::default(),
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            current_profile: self.energy.current_profile,
            last_delta: self.energy.last_delta,
            total_energy_used: self.energy.total_energy_used,
            total_truth_generated: self.energy.total_truth_generated,
            overall_ratio: self.energy.overall_ratio(),
            evaluations: self.energy.evaluations,
            profile_history: self.energy.history().cloned().collect(),
            previous_exit_readiness: self.resilience.previous_exit_readiness,
            band: self.resilience.band,
            last_trigger_reason: self.resilience.last_trigger_reason,
        }
    }
}

/// Point-in-time copy of [`EngineState`] for inspection and export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub current_profile: ProfileKind,
    pub last_delta: Option<f64>,
    pub total_energy_used: f64,
    pub total_truth_generated: f64,
    pub overall_ratio: f64,
    pub evaluations: u64,
    pub profile_history: Vec<ProfileChange>,
    pub previous_exit_readiness: Option<f64>,
    pub band: Band,
    pub last_trigger_reason: TriggerReason,
}
