use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Environmental signals handed in by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    /// Battery charge in [0, 1]; `None` when there is no battery.
    pub battery_level: Option<f64>,
    pub power_plugged: Option<bool>,
    /// System load in [0, 1].
    pub system_load: f64,
    pub local_time: NaiveTime,
    pub is_weekend: bool,
}

impl EnvironmentSnapshot {
    /// Snapshot at `at`, deriving the weekend flag from the date.
    pub fn at(at: NaiveDateTime, system_load: f64) -> Self {
        Self {
            battery_level: None,
            power_plugged: None,
            system_load,
            local_time: at.time(),
            is_weekend: matches!(at.weekday(), Weekday::Sat | Weekday::Sun),
        }
    }

    pub fn with_battery(mut self, level: f64, plugged: bool) -> Self {
        self.battery_level = Some(level);
        self.power_plugged = Some(plugged);
        self
    }

    pub fn hour(&self) -> u32 {
        self.local_time.hour()
    }

    /// Mains power. A machine with no battery reading is assumed to be on
    /// mains unless it reports otherwise.
    pub fn powered_externally(&self) -> bool {
        self.power_plugged.unwrap_or(self.battery_level.is_none())
    }

    pub fn on_battery(&self) -> bool {
        !self.powered_externally()
    }

    /// Copy with load and battery level clamped to [0, 1].
    pub fn sanitized(&self) -> Self {
        let unit = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            battery_level: self.battery_level.map(unit),
            system_load: unit(self.system_load),
            ..self.clone()
        }
    }
}

impl Default for EnvironmentSnapshot {
    fn default() -> Self {
        Self {
            battery_level: None,
            power_plugged: None,
            system_load: 0.0,
            local_time: NaiveTime::default(),
            is_weekend: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn weekend_derived_from_date() {
        // 2024-06-08 was a Saturday, 2024-06-10 a Monday
        assert!(EnvironmentSnapshot::at(datetime(2024, 6, 8, 12), 0.1).is_weekend);
        assert!(!EnvironmentSnapshot::at(datetime(2024, 6, 10, 12), 0.1).is_weekend);
    }

    #[test]
    fn power_source_inference() {
        let base = EnvironmentSnapshot::default();
        assert!(base.powered_externally());
        assert!(base.clone().with_battery(0.5, false).on_battery());
        assert!(base.clone().with_battery(0.5, true).powered_externally());

        let unknown_plug = EnvironmentSnapshot {
            battery_level: Some(0.4),
            ..base
        };
        assert!(unknown_plug.on_battery());
    }

    #[test]
    fn sanitized_clamps() {
        let s = EnvironmentSnapshot {
            system_load: 1.7,
            battery_level: Some(-0.2),
            ..EnvironmentSnapshot::default()
        }
        .sanitized();
        assert_eq!(s.system_load, 1.0);
        assert_eq!(s.battery_level, Some(0.0));
    }
}
