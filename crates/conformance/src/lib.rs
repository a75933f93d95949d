//! Shared fixtures for the conformance suites.

use std::sync::OnceLock;

use attune_energy::EnvironmentSnapshot;
use attune_engine::{Engine, EngineConfig};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Mixed-emotion sentence: joy and sadness joined by a contrast.
pub const MIXED_EMOTIONS: &str = "I am happy, although I am sad.";
/// Same shape with only one detected emotion.
pub const SINGLE_EMOTION: &str = "I am happy, although I am tired.";

/// Engine with the default configuration and built-in knowledge bases.
pub fn default_engine() -> Engine {
    match Engine::from_config(EngineConfig::default()) {
        Ok(engine) => engine,
        Err(e) => panic!("default engine must build: {e}"),
    }
}

/// One engine per test binary, for suites that run many cases.
pub fn shared_engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(default_engine)
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour % 24, minute % 60, 0).unwrap_or_default()
}

/// Weekday at `hour` with no battery and idle load.
pub fn weekday_at(hour: u32) -> EnvironmentSnapshot {
    EnvironmentSnapshot::at(datetime(2024, 3, 13, hour), 0.0)
}

/// Saturday at `hour` with no battery and idle load.
pub fn weekend_at(hour: u32) -> EnvironmentSnapshot {
    EnvironmentSnapshot::at(datetime(2024, 3, 16, hour), 0.0)
}

/// Weekday noon on battery at `level`.
pub fn on_battery(level: f64) -> EnvironmentSnapshot {
    weekday_at(12).with_battery(level, false)
}

/// Weekday noon plugged in at `level`.
pub fn plugged_in(level: f64) -> EnvironmentSnapshot {
    weekday_at(12).with_battery(level, true)
}

fn datetime(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_default()
        .and_time(time(hour, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_fixtures() {
        assert!(!weekday_at(9).is_weekend);
        assert!(weekend_at(9).is_weekend);
        assert_eq!(weekday_at(9).hour(), 9);
        assert!(on_battery(0.5).on_battery());
        assert!(plugged_in(0.5).powered_externally());
    }
}
