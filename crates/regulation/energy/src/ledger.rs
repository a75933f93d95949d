use std::collections::VecDeque;

use chrono::NaiveTime;
use serde::Serialize;
use tracing::info;

use crate::profile::ProfileKind;

/// Number of profile changes retained.
pub const PROFILE_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileChange {
    pub from: ProfileKind,
    pub to: ProfileKind,
    /// Local time of the snapshot that caused the change.
    pub at: NaiveTime,
    /// Evaluation count when the change happened.
    pub evaluation: u64,
}

/// Process-wide energy bookkeeping.
///
/// Owned by the engine state and only mutated under its lock.
#[derive(Debug, Clone, Serialize)]
pub struct EnergyLedger {
    pub current_profile: ProfileKind,
    pub last_delta: Option<f64>,
    pub total_energy_used: f64,
    pub total_truth_generated: f64,
    pub evaluations: u64,
    history: VecDeque<ProfileChange>,
}

impl EnergyLedger {
    pub fn new(initial: ProfileKind) -> Self {
        Self {
            current_profile: initial,
            last_delta: None,
            total_energy_used: 0.0,
            total_truth_generated: 0.0,
            evaluations: 0,
            history: VecDeque::new(),
        }
    }

    /// Switch to `to`, recording the change. Returns true if the profile changed.
    pub fn switch_profile(&mut self, to: ProfileKind, at: NaiveTime) -> bool {
        if to == self.current_profile {
            return false;
        }
        let from = self.current_profile;
        info!(%from, %to, evaluation = self.evaluations, "energy profile changed");
        if self.history.len() == PROFILE_HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(ProfileChange {
            from,
            to,
            at,
            evaluation: self.evaluations,
        });
        self.current_profile = to;
        true
    }

    pub fn record(&mut self, energy_used: f64, truth_value: f64) {
        self.total_energy_used += energy_used;
        self.total_truth_generated += truth_value;
        self.evaluations += 1;
    }

    pub fn history(&self) -> impl Iterator<Item = &ProfileChange> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Lifetime truth generated per unit of energy; 0 before any evaluation.
    pub fn overall_ratio(&self) -> f64 {
        if self.total_energy_used > 0.0 {
            self.total_truth_generated / self.total_energy_used
        } else {
            0.0
        }
    }
}

impl Default for EnergyLedger {
    fn default() -> Self {
        Self::new(ProfileKind::default())
    }
}
