//! Property tests: identical (text, environment) pairs give identical scores.

use attune_conformance::{default_engine, shared_engine, time};
use attune_energy::EnvironmentSnapshot;
use proptest::prelude::*;

fn arb_environment() -> impl Strategy<Value = EnvironmentSnapshot> {
    (
        prop::option::of(0.0f64..=1.0),
        any::<bool>(),
        0.0f64..=1.0,
        0u32..24,
        any::<bool>(),
    )
        .prop_map(|(battery, plugged, system_load, hour, is_weekend)| {
            let base = EnvironmentSnapshot {
                system_load,
                local_time: time(hour, 0),
                is_weekend,
                ..EnvironmentSnapshot::default()
            };
            match battery {
                Some(level) => base.with_battery(level, plugged),
                None => base,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn same_engine_repeats_exactly(text in "[a-zA-Z ,.?']{0,120}", env in arb_environment()) {
        let engine = shared_engine();
        let first = engine.evaluate_text(&text, &env);
        let second = engine.evaluate_text(&text, &env);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fresh_engines_agree(text in "[a-zA-Z ,.?']{0,120}", env in arb_environment()) {
        let a = default_engine().evaluate_text(&text, &env);
        let b = default_engine().evaluate_text(&text, &env);
        prop_assert_eq!(a.intent, b.intent);
        prop_assert_eq!(a.logic, b.logic);
        prop_assert_eq!(a.energy, b.energy);
        prop_assert_eq!(a.resilience, b.resilience);
    }
}
