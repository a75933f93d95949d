//! Per-evaluation energy accounting.
//!
//! The regulator holds configuration only. Mutable totals live in an
//! [`EnergyLedger`](crate::EnergyLedger) that the caller owns and locks.

use std::sync::Arc;

use attune_scoring_types::{clamp01, ProcessingBudget, EPSILON};
use serde::Serialize;
use tracing::debug;

use crate::config::EnergyConfig;
use crate::delta::{compute_delta, DeltaReading};
use crate::environment::EnvironmentSnapshot;
use crate::error::EnergyResult;
use crate::ledger::EnergyLedger;
use crate::policy::{policy_for, EnergyPolicy};
use crate::profile::{EnergyProfile, ProfileKind};

/// Minimum energy charged for any evaluation.
const MIN_ENERGY_USED: f64 = 0.1;
/// Tokens per unit of input complexity.
const TOKENS_PER_COMPLEXITY: usize = 10;

/// Energy accounting for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyState {
    pub delta: f64,
    pub energy_used: f64,
    pub energy_justice_ratio: f64,
    /// `energy_justice_ratio - ethical_threshold`
    pub ethical_margin: f64,
    pub current_profile: ProfileKind,
    pub sleep_readiness: f64,
    pub shutdown_urgency: f64,
    pub limit_readiness: f64,
    pub processing_depth: usize,
    /// Memory share the profile allows, in [0, 1]. Advisory for the
    /// embedding process; the scorers are bounded by token budget only.
    pub memory_limit: f64,
    pub battery_level: Option<f64>,
    pub power_plugged: Option<bool>,
}

/// Stateless energy regulator; all mutable bookkeeping lives in the
/// caller's [`EnergyLedger`].
#[derive(Debug, Clone)]
pub struct EnergyRegulator {
    config: EnergyConfig,
    policy: Arc<dyn EnergyPolicy>,
}

impl EnergyRegulator {
    pub fn new(config: EnergyConfig) -> EnergyResult<Self> {
        config.validate()?;
        let policy = policy_for(&config);
        Ok(Self { config, policy })
    }

    pub fn with_policy(mut self, policy: Arc<dyn EnergyPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &EnergyConfig {
        &self.config
    }

    pub fn policy(&self) -> &dyn EnergyPolicy {
        self.policy.as_ref()
    }

    pub fn refresh_delta(&self, snapshot: &EnvironmentSnapshot) -> DeltaReading {
        compute_delta(&self.config, snapshot)
    }

    pub fn select_profile(&self, snapshot: &EnvironmentSnapshot) -> ProfileKind {
        self.policy.select(snapshot)
    }

    pub fn profile(&self, kind: ProfileKind) -> &EnergyProfile {
        self.config.profiles.get(kind)
    }

    /// Complexity of an input of `token_count` tokens.
    pub fn input_complexity(token_count: usize) -> usize {
        token_count.div_ceil(TOKENS_PER_COMPLEXITY)
    }

    pub fn max_processing_depth(&self, kind: ProfileKind, input_complexity: usize) -> usize {
        input_complexity.min(self.profile(kind).max_processing_depth)
    }

    pub fn memory_limit(&self, kind: ProfileKind) -> f64 {
        self.profile(kind).max_memory_usage
    }

    /// 0 while the input fits the profile's depth, rising to 1 as it
    /// exceeds it by a full profile depth.
    pub fn limit_readiness(&self, kind: ProfileKind, input_complexity: usize) -> f64 {
        let max_depth = self.profile(kind).max_processing_depth;
        if input_complexity <= max_depth {
            return 0.0;
        }
        let over = (input_complexity - max_depth) as f64;
        (over / max_depth.max(1) as f64).min(1.0)
    }

    /// Work the scorers may do on an input of `token_count` tokens.
    pub fn budget(&self, kind: ProfileKind, token_count: usize) -> ProcessingBudget {
        let depth = self.max_processing_depth(kind, Self::input_complexity(token_count));
        ProcessingBudget::for_depth(depth)
    }

    pub fn estimate_processing_secs(&self, tokens_examined: usize) -> f64 {
        self.config.cost.estimate_secs(tokens_examined)
    }

    /// Energy charged for `processing_secs` under `kind` at the given load.
    pub fn energy_used(&self, kind: ProfileKind, processing_secs: f64, system_load: f64) -> f64 {
        let weight = self.profile(kind).resource_weight;
        let raw = processing_secs.max(0.0) * (1.0 + 2.0 * system_load.clamp(0.0, 1.0)) * weight;
        raw.max(MIN_ENERGY_USED)
    }

    /// `clamp((sleep - r) / (sleep - shutdown))`
    pub fn sleep_readiness(&self, ratio: f64) -> f64 {
        let span = (self.config.sleep_threshold - self.config.shutdown_threshold).max(EPSILON);
        clamp01((self.config.sleep_threshold - ratio) / span)
    }

    /// `clamp((shutdown - r) / shutdown)`
    pub fn shutdown_urgency(&self, ratio: f64) -> f64 {
        let span = self.config.shutdown_threshold.max(EPSILON);
        clamp01((self.config.shutdown_threshold - ratio) / span)
    }

    /// Account one evaluation run under `kind`.
    ///
    /// `kind` is the profile the evaluation was admitted with, which may
    /// differ from `ledger.current_profile` if the profile changed while
    /// the evaluation was scoring.
    pub fn evaluate(
        &self,
        ledger: &mut EnergyLedger,
        kind: ProfileKind,
        reading: &DeltaReading,
        truth_value: f64,
        processing_secs: f64,
        input_complexity: usize,
    ) -> EnergyState {
        let delta = reading.delta;
        let energy_used = self.energy_used(kind, processing_secs, reading.snapshot.system_load);
        let energy_justice_ratio = (truth_value * delta) / energy_used.max(EPSILON);

        let state = EnergyState {
            delta,
            energy_used,
            energy_justice_ratio,
            ethical_margin: energy_justice_ratio - self.config.ethical_threshold,
            current_profile: kind,
            sleep_readiness: self.sleep_readiness(energy_justice_ratio),
            shutdown_urgency: self.shutdown_urgency(energy_justice_ratio),
            limit_readiness: self.limit_readiness(kind, input_complexity),
            processing_depth: self.max_processing_depth(kind, input_complexity).max(1),
            memory_limit: self.memory_limit(kind),
            battery_level: reading.snapshot.battery_level,
            power_plugged: reading.snapshot.power_plugged,
        };

        ledger.last_delta = Some(delta);
        ledger.record(energy_used, truth_value);

        debug!(
            profile = %kind,
            delta,
            energy_used,
            ratio = energy_justice_ratio,
            sleep = state.sleep_readiness,
            shutdown = state.shutdown_urgency,
            "energy evaluated"
        );
        state
    }
}
