use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EnergyError, EnergyResult};
use crate::profile::{ProfileKind, ProfileTable};

/// Energy regulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnergyConfig {
    /// Base δ before environmental factors.
    pub energy_justice_delta: f64,
    pub night_time_factor: f64,
    pub peak_time_factor: f64,
    pub normal_time_factor: f64,
    pub weekend_factor: f64,
    /// Fraction of system load subtracted from the load adjustment.
    pub load_factor: f64,
    pub night_window: TimeWindow,
    pub peak_window: TimeWindow,
    pub battery: BatteryFactors,

    /// Seconds between δ recomputations.
    pub delta_update_interval: u64,
    /// Seconds between environment polls.
    pub source_check_interval: u64,

    pub sleep_threshold: f64,
    pub shutdown_threshold: f64,
    pub ethical_threshold: f64,

    /// Select profiles from battery state instead of always using `default_profile`.
    pub adaptive: bool,
    pub default_profile: ProfileKind,
    /// Battery level below which the adaptive policy picks `eco`.
    pub eco_below: f64,
    /// Battery level below which the adaptive policy picks `balanced`.
    pub balanced_below: f64,
    pub profiles: ProfileTable,

    pub cost: CostModel,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            energy_justice_delta: 5.0,
            night_time_factor: 1.2,
            peak_time_factor: 0.8,
            normal_time_factor: 1.0,
            weekend_factor: 0.9,
            load_factor: 0.5,
            night_window: TimeWindow {
                start_hour: 22,
                end_hour: 6,
            },
            peak_window: TimeWindow {
                start_hour: 10,
                end_hour: 15,
            },
            battery: BatteryFactors::default(),
            delta_update_interval: 300,
            source_check_interval: 60,
            sleep_threshold: 0.4,
            shutdown_threshold: 0.2,
            ethical_threshold: 0.7,
            adaptive: true,
            default_profile: ProfileKind::Balanced,
            eco_below: 0.2,
            balanced_below: 0.5,
            profiles: ProfileTable::default(),
            cost: CostModel::default(),
        }
    }
}

impl EnergyConfig {
    pub fn delta_refresh_period(&self) -> Duration {
        Duration::from_secs(self.delta_update_interval)
    }

    pub fn source_check_period(&self) -> Duration {
        Duration::from_secs(self.source_check_interval)
    }

    pub fn validate(&self) -> EnergyResult<()> {
        let positive = [
            ("energy_justice_delta", self.energy_justice_delta),
            ("night_time_factor", self.night_time_factor),
            ("peak_time_factor", self.peak_time_factor),
            ("normal_time_factor", self.normal_time_factor),
            ("weekend_factor", self.weekend_factor),
            ("battery.low_factor", self.battery.low_factor),
            ("battery.on_battery_factor", self.battery.on_battery_factor),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(EnergyError::invalid(field, format!("{value} must be > 0")));
            }
        }

        let unit = [
            ("load_factor", self.load_factor),
            ("sleep_threshold", self.sleep_threshold),
            ("shutdown_threshold", self.shutdown_threshold),
            ("eco_below", self.eco_below),
            ("balanced_below", self.balanced_below),
            ("battery.low_level", self.battery.low_level),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(EnergyError::invalid(field, format!("{value} outside [0, 1]")));
            }
        }

        if self.ethical_threshold < 0.0 || !self.ethical_threshold.is_finite() {
            return Err(EnergyError::invalid("ethical_threshold", "must be >= 0"));
        }
        if self.shutdown_threshold <= 0.0 || self.shutdown_threshold >= self.sleep_threshold {
            return Err(EnergyError::invalid(
                "shutdown_threshold",
                "must be > 0 and below sleep_threshold",
            ));
        }
        if self.eco_below > self.balanced_below {
            return Err(EnergyError::invalid("eco_below", "must not exceed balanced_below"));
        }
        if self.delta_update_interval == 0 {
            return Err(EnergyError::invalid("delta_update_interval", "must be > 0"));
        }
        if self.source_check_interval == 0 {
            return Err(EnergyError::invalid("source_check_interval", "must be > 0"));
        }
        self.night_window.validate("night_window")?;
        self.peak_window.validate("peak_window")?;

        for (kind, profile) in self.profiles.iter() {
            if profile.max_processing_depth == 0 {
                return Err(EnergyError::invalid(
                    "profiles",
                    format!("{kind}: max_processing_depth must be >= 1"),
                ));
            }
            if !(0.0..=1.0).contains(&profile.max_memory_usage) {
                return Err(EnergyError::invalid(
                    "profiles",
                    format!("{kind}: max_memory_usage outside [0, 1]"),
                ));
            }
            if !(profile.resource_weight > 0.0) {
                return Err(EnergyError::invalid(
                    "profiles",
                    format!("{kind}: resource_weight must be > 0"),
                ));
            }
        }

        if !(self.cost.base_cost_secs >= 0.0 && self.cost.per_token_cost_secs >= 0.0) {
            return Err(EnergyError::invalid("cost", "costs must be >= 0"));
        }
        Ok(())
    }
}

/// Half-open range of local hours `[start_hour, end_hour)`. Wraps past
/// midnight when `start_hour > end_hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl TimeWindow {
    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            (self.start_hour..self.end_hour).contains(&hour)
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }

    fn validate(&self, field: &'static str) -> EnergyResult<()> {
        if self.start_hour > 23 || self.end_hour > 24 {
            return Err(EnergyError::invalid(field, "hours must be within 0..=24"));
        }
        Ok(())
    }
}

/// δ multipliers for battery operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryFactors {
    /// Battery level under which `low_factor` applies.
    pub low_level: f64,
    pub low_factor: f64,
    pub on_battery_factor: f64,
}

impl Default for BatteryFactors {
    fn default() -> Self {
        Self {
            low_level: 0.3,
            low_factor: 1.5,
            on_battery_factor: 1.2,
        }
    }
}

/// Deterministic processing-time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostModel {
    pub base_cost_secs: f64,
    pub per_token_cost_secs: f64,
}

impl CostModel {
    pub fn estimate_secs(&self, tokens_examined: usize) -> f64 {
        self.base_cost_secs + self.per_token_cost_secs * tokens_examined as f64
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            base_cost_secs: 0.05,
            per_token_cost_secs: 0.002,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        EnergyConfig::default().validate().unwrap();
    }

    #[test]
    fn night_window_wraps_midnight() {
        let night = EnergyConfig::default().night_window;
        assert!(night.contains(23));
        assert!(night.contains(0));
        assert!(night.contains(5));
        assert!(!night.contains(6));
        assert!(!night.contains(21));
    }

    #[test]
    fn peak_window_end_exclusive() {
        let peak = EnergyConfig::default().peak_window;
        assert!(peak.contains(10));
        assert!(peak.contains(14));
        assert!(!peak.contains(15));
    }

    #[test]
    fn thresholds_must_be_ordered() {
        let mut c = EnergyConfig::default();
        c.shutdown_threshold = 0.5;
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("shutdown_threshold"));
    }

    #[test]
    fn zero_interval_rejected() {
        let mut c = EnergyConfig::default();
        c.delta_update_interval = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_depth_profile_rejected() {
        let mut c = EnergyConfig::default();
        c.profiles.eco.max_processing_depth = 0;
        assert!(c.validate().unwrap_err().to_string().contains("eco"));
    }

    #[test]
    fn periods() {
        let c = EnergyConfig::default();
        assert_eq!(c.delta_refresh_period(), Duration::from_secs(300));
        assert_eq!(c.source_check_period(), Duration::from_secs(60));
    }

    #[test]
    fn cost_estimate_is_linear() {
        let m = CostModel::default();
        assert!((m.estimate_secs(100) - 0.25).abs() < 1e-12);
    }
}
