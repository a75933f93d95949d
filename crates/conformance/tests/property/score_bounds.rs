//! Property tests: every clamped score stays in [0, 1] for arbitrary text.

use attune_conformance::{shared_engine, weekday_at};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Sentences drawn from words the knowledge bases react to, plus noise.
fn arb_sentence() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("truth".to_string()),
        Just("meaning".to_string()),
        Just("happy".to_string()),
        Just("sad".to_string()),
        Just("although".to_string()),
        Just("not".to_string()),
        Just("maybe".to_string()),
        Just("because".to_string()),
        Just("lie".to_string()),
        Just("why".to_string()),
        "[a-z]{1,10}",
    ];
    (prop::collection::vec(word, 0..60), prop_oneof![Just("."), Just("?"), Just("")])
        .prop_map(|(words, end)| format!("{}{}", words.join(" "), end))
}

fn assert_unit(name: &str, value: f64) -> Result<(), TestCaseError> {
    prop_assert!(
        (0.0..=1.0).contains(&value),
        "{} = {} outside [0, 1]",
        name,
        value
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn scores_are_bounded_for_sentences(text in arb_sentence()) {
        let report = shared_engine().evaluate_text(&text, &weekday_at(12));
        assert_unit("coherence", report.intent.coherence)?;
        assert_unit("freedom_degree", report.intent.freedom_degree)?;
        assert_unit("action_suitability", report.intent.action_suitability)?;
        assert_unit("truth_value", report.logic.truth_value)?;
        assert_unit("depth_score", report.logic.emotional_depth.depth_score)?;
        assert_unit("discrepancy_score", report.logic.discrepancy.discrepancy_score)?;
        assert_unit("exit_readiness", report.resilience.exit_readiness)?;
        assert_unit("sleep_readiness", report.energy.sleep_readiness)?;
        assert_unit("shutdown_urgency", report.energy.shutdown_urgency)?;
        prop_assert!(report.intent.resonance_value >= 0.0);
    }

    #[test]
    fn scores_are_bounded_for_any_unicode(text in "\\PC{0,200}") {
        let report = shared_engine().evaluate_text(&text, &weekday_at(3));
        assert_unit("coherence", report.intent.coherence)?;
        assert_unit("truth_value", report.logic.truth_value)?;
        assert_unit("depth_score", report.logic.emotional_depth.depth_score)?;
        assert_unit("discrepancy_score", report.logic.discrepancy.discrepancy_score)?;
        prop_assert!(report.energy.energy_justice_ratio.is_finite());
    }

    /// Shutdown urgency never exceeds sleep readiness.
    #[test]
    fn shutdown_implies_sleep(text in arb_sentence(), load in 0.0f64..=1.0) {
        let mut env = weekday_at(20);
        env.system_load = load;
        let report = shared_engine().evaluate_text(&text, &env);
        prop_assert!(report.energy.shutdown_urgency <= report.energy.sleep_readiness);
    }
}
