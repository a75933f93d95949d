//! Energy-justice factor δ.

use serde::Serialize;
use tracing::debug;

use crate::config::EnergyConfig;
use crate::environment::EnvironmentSnapshot;

/// Smallest δ ever reported.
pub const DELTA_FLOOR: f64 = 1e-3;

/// A computed δ together with the factors that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeltaReading {
    pub delta: f64,
    pub time_factor: f64,
    pub load_adjustment: f64,
    pub battery_factor: f64,
    pub day_factor: f64,
    /// The sanitized snapshot the reading was computed from.
    pub snapshot: EnvironmentSnapshot,
}

/// `δ = base_delta * time_factor * load_adjustment * battery_factor * day_factor`,
/// floored at [`DELTA_FLOOR`].
pub fn compute_delta(config: &EnergyConfig, snapshot: &EnvironmentSnapshot) -> DeltaReading {
    let snapshot = snapshot.sanitized();
    let hour = snapshot.hour();

    let time_factor = if config.night_window.contains(hour) {
        config.night_time_factor
    } else if config.peak_window.contains(hour) {
        config.peak_time_factor
    } else {
        config.normal_time_factor
    };

    let load_adjustment = (1.0 - snapshot.system_load * config.load_factor).max(0.0);

    let battery_factor = if snapshot.on_battery() {
        match snapshot.battery_level {
            Some(level) if level < config.battery.low_level => config.battery.low_factor,
            _ => config.battery.on_battery_factor,
        }
    } else {
        1.0
    };

    let day_factor = if snapshot.is_weekend {
        config.weekend_factor
    } else {
        1.0
    };

    let raw = config.energy_justice_delta * time_factor * load_adjustment * battery_factor * day_factor;
    let delta = if raw.is_finite() {
        raw.max(DELTA_FLOOR)
    } else {
        DELTA_FLOOR
    };

    debug!(
        delta,
        time_factor, load_adjustment, battery_factor, day_factor, "delta computed"
    );

    DeltaReading {
        delta,
        time_factor,
        load_adjustment,
        battery_factor,
        day_factor,
        snapshot,
    }
}
