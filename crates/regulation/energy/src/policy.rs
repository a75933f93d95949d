use std::fmt::Debug;
use std::sync::Arc;

use crate::config::EnergyConfig;
use crate::environment::EnvironmentSnapshot;
use crate::profile::ProfileKind;

/// Strategy that chooses the active energy profile.
pub trait EnergyPolicy: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn select(&self, snapshot: &EnvironmentSnapshot) -> ProfileKind;
}

/// Always the configured default profile.
#[derive(Debug, Clone)]
pub struct BasicPolicy {
    pub profile: ProfileKind,
}

impl EnergyPolicy for BasicPolicy {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn select(&self, _snapshot: &EnvironmentSnapshot) -> ProfileKind {
        self.profile
    }
}

/// Battery-driven selection: mains power runs at full performance, a
/// draining battery steps down to balanced and then eco.
#[derive(Debug, Clone)]
pub struct AdaptivePolicy {
    pub eco_below: f64,
    pub balanced_below: f64,
}

impl Default for AdaptivePolicy {
    fn default() -> Self {
        Self {
            eco_below: 0.2,
            balanced_below: 0.5,
        }
    }
}

impl EnergyPolicy for AdaptivePolicy {
    fn name(&self) -> &'static str {
        "adaptive"
    }

    fn select(&self, snapshot: &EnvironmentSnapshot) -> ProfileKind {
        if snapshot.powered_externally() {
            return ProfileKind::Performance;
        }
        match snapshot.battery_level {
            Some(level) if level < self.eco_below => ProfileKind::Eco,
            Some(level) if level < self.balanced_below => ProfileKind::Balanced,
            _ => ProfileKind::Performance,
        }
    }
}

/// Policy selected by `config.adaptive`.
pub fn policy_for(config: &EnergyConfig) -> Arc<dyn EnergyPolicy> {
    if config.adaptive {
        Arc::new(AdaptivePolicy {
            eco_below: config.eco_below,
            balanced_below: config.balanced_below,
        })
    } else {
        Arc::new(BasicPolicy {
            profile: config.default_profile,
        })
    }
}
