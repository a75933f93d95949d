//! Property tests: δ is strictly positive for every environment snapshot.

use attune_conformance::time;
use attune_energy::{compute_delta, AdaptivePolicy, EnergyConfig, EnergyPolicy, EnvironmentSnapshot, ProfileKind};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Snapshots including out-of-range readings, which are clamped on use.
fn arb_snapshot() -> impl Strategy<Value = EnvironmentSnapshot> {
    (
        prop::option::of(-0.5f64..1.5),
        prop::option::of(any::<bool>()),
        -0.5f64..1.5,
        0u32..24,
        0u32..60,
        any::<bool>(),
    )
        .prop_map(|(battery_level, power_plugged, system_load, hour, minute, is_weekend)| {
            EnvironmentSnapshot {
                battery_level,
                power_plugged,
                system_load,
                local_time: time(hour, minute),
                is_weekend,
            }
        })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn delta_is_positive(snapshot in arb_snapshot()) {
        let reading = compute_delta(&EnergyConfig::default(), &snapshot);
        prop_assert!(reading.delta > 0.0);
        prop_assert!(reading.delta.is_finite());
    }

    #[test]
    fn delta_is_positive_for_any_base(
        snapshot in arb_snapshot(),
        base in 0.001f64..100.0,
        load_factor in 0.0f64..=1.0,
    ) {
        let config = EnergyConfig {
            energy_justice_delta: base,
            load_factor,
            ..EnergyConfig::default()
        };
        prop_assert!(compute_delta(&config, &snapshot).delta > 0.0);
    }

    /// Lower battery on battery power never selects a hungrier profile.
    #[test]
    fn adaptive_policy_is_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let policy = AdaptivePolicy::default();
        let pick = |level: f64| {
            policy.select(&EnvironmentSnapshot::default().with_battery(level, false))
        };
        prop_assert!(pick(low) <= pick(high));
        prop_assert_eq!(
            policy.select(&EnvironmentSnapshot::default().with_battery(low, true)),
            ProfileKind::Performance
        );
    }
}
