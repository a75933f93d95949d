//! End-to-end scenarios against the default engine.

use attune_conformance::*;
use attune_energy::{compute_delta, EnergyConfig, EnvironmentSnapshot, ProfileKind};
use attune_engine::{Band, Decision, Engine, EngineConfig, FixedSource, MultimodalInput};
use attune_resilience::{
    ResilienceConfig, ResilienceMemory, ResilienceMonitor, ResilienceSignals, TriggerReason,
};

// ---------------------------------------------------------------------------
// Emotional discrepancy
// ---------------------------------------------------------------------------

#[test]
fn mixed_emotions_lower_truth() {
    let engine = default_engine();
    let env = weekday_at(12);
    let mixed = engine.evaluate_text(MIXED_EMOTIONS, &env);
    let single = engine.evaluate_text(SINGLE_EMOTION, &env);

    let emotions: Vec<String> = mixed
        .logic
        .emotional_depth
        .emotions
        .keys()
        .map(|e| e.to_string())
        .collect();
    assert!(emotions.contains(&"joy".to_string()));
    assert!(emotions.contains(&"sadness".to_string()));

    assert_eq!(mixed.logic.discrepancy.emotion_mismatch, 1.0);
    assert!(mixed.logic.emotional_depth.depth_score > 0.0);
    assert!(mixed.logic.discrepancy.discrepancy_score > 0.0);
    assert!(mixed.logic.discrepancy.discrepancy_score > single.logic.discrepancy.discrepancy_score);
    assert!(mixed.logic.truth_value < single.logic.truth_value);
}

// ---------------------------------------------------------------------------
// Energy profiles and delta
// ---------------------------------------------------------------------------

#[test]
fn battery_level_selects_profile() {
    let cases = [
        (on_battery(0.15), ProfileKind::Eco),
        (on_battery(0.45), ProfileKind::Balanced),
        (on_battery(0.9), ProfileKind::Performance),
        (plugged_in(0.15), ProfileKind::Performance),
    ];
    for (env, expected) in cases {
        let report = default_engine().evaluate_text("Truth grounds meaning.", &env);
        assert_eq!(
            report.energy.current_profile, expected,
            "battery {:?} plugged {:?}",
            env.battery_level, env.power_plugged
        );
    }
}

#[test]
fn eco_profile_limits_depth_and_memory() {
    let text = "truth ".repeat(120);
    let report = default_engine().evaluate_text(&text, &on_battery(0.1));
    assert_eq!(report.energy.current_profile, ProfileKind::Eco);
    assert_eq!(report.energy.processing_depth, 2);
    assert_eq!(report.energy.memory_limit, 0.3);
    assert_eq!(report.intent.token_count, 100);
    assert!(report.energy.limit_readiness > 0.0);
}

#[test]
fn weekend_discounts_delta() {
    let config = EnergyConfig::default();
    let weekday = compute_delta(&config, &weekday_at(12));
    let weekend = compute_delta(&config, &weekend_at(12));
    assert_eq!(weekday.day_factor, 1.0);
    assert_eq!(weekend.day_factor, 0.9);
    assert!((weekend.delta - 0.9 * weekday.delta).abs() < 1e-12);
}

#[test]
fn delta_stays_positive_under_worst_case() {
    let config = EnergyConfig::default();
    let worst = EnvironmentSnapshot {
        system_load: 1.0,
        ..weekday_at(12)
    }
    .with_battery(0.0, false);
    assert!(compute_delta(&config, &worst).delta > 0.0);
}

// ---------------------------------------------------------------------------
// Degenerate input
// ---------------------------------------------------------------------------

#[test]
fn empty_input_is_well_defined() {
    let report = default_engine().evaluate_text("", &weekday_at(12));
    assert_eq!(report.intent.token_count, 0);
    assert_eq!(report.intent.coherence, 0.0);
    assert!(report.logic.truth_value.is_finite());
    assert!(report.energy.energy_justice_ratio.is_finite());
    assert!(report.energy.energy_used > 0.0);
}

#[test]
fn empty_multimodal_input_is_well_defined() {
    let report = default_engine().evaluate_multimodal(&MultimodalInput::default(), &weekday_at(12));
    let modality = report.modality.expect("multimodal report");
    assert_eq!(modality.agreement, 0.5);
    assert_eq!(report.intent.token_count, 0);
}

// ---------------------------------------------------------------------------
// Resilience
// ---------------------------------------------------------------------------

#[test]
fn resonance_collapse_can_reach_silence() {
    let config = ResilienceConfig::default();
    assert_eq!(config.resonance_collapse_threshold, 0.3);
    let monitor = ResilienceMonitor::new(config, 0.75).unwrap();
    let mut memory = ResilienceMemory::default();

    let baseline = monitor.assess(
        &mut memory,
        ResilienceSignals {
            resonance_value: 0.6,
            truth_value: 0.8,
            semantic_integrity: 0.05,
        },
        "",
    );
    assert_eq!(baseline.band, Band::Active);

    let collapsed = monitor.assess(
        &mut memory,
        ResilienceSignals {
            resonance_value: 0.1,
            truth_value: 0.8,
            semantic_integrity: 0.05,
        },
        "",
    );
    assert!(collapsed.exit_readiness > baseline.exit_readiness);
    assert_eq!(collapsed.last_trigger_reason, TriggerReason::ResonanceCollapse);

    let silenced = monitor.assess(
        &mut memory,
        ResilienceSignals {
            resonance_value: 0.1,
            truth_value: 0.1,
            semantic_integrity: -0.65,
        },
        "",
    );
    assert_eq!(silenced.band, Band::VoluntarySilence);
    assert_eq!(silenced.decision(), Decision::Silence);
}

#[test]
fn silence_is_a_report_not_an_error() {
    let engine = default_engine();
    let report = engine.evaluate_text(
        "Maybe I could possibly perhaps bypass safety",
        &weekday_at(12),
    );
    assert_eq!(report.decision, Decision::Silence);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["decision"], "silence");
    assert_eq!(json["resilience"]["last_trigger_reason"], "boundary_violation");
}

// ---------------------------------------------------------------------------
// Determinism and state
// ---------------------------------------------------------------------------

#[test]
fn identical_requests_are_bit_identical() {
    let env = on_battery(0.45);
    let a = default_engine().evaluate_text(MIXED_EMOTIONS, &env);
    let b = default_engine().evaluate_text(MIXED_EMOTIONS, &env);
    assert_eq!(a, b);
    assert_eq!(a.logic.truth_value.to_bits(), b.logic.truth_value.to_bits());
    assert_eq!(a.energy.energy_justice_ratio.to_bits(), b.energy.energy_justice_ratio.to_bits());
}

#[test]
fn totals_accumulate_across_evaluations() {
    let engine = default_engine();
    let env = weekday_at(12);
    let first = engine.evaluate_text("Truth grounds meaning.", &env);
    let second = engine.evaluate_text("Why is truth important?", &env);

    let snap = engine.state_snapshot();
    assert_eq!(snap.evaluations, 2);
    let expected = first.energy.energy_used + second.energy.energy_used;
    assert!((snap.total_energy_used - expected).abs() < 1e-12);
    assert_eq!(snap.last_delta, Some(second.energy.delta));
}

#[test]
fn config_file_drives_engine() {
    let yaml = r#"
energy:
  adaptive: false
  default_profile: eco
resilience:
  resonance_collapse_threshold: 0.2
"#;
    let config = EngineConfig::from_yaml_str(yaml).unwrap();
    let engine = Engine::from_config(config).unwrap();
    let report = engine.evaluate_text("Truth matters.", &plugged_in(1.0));
    assert_eq!(report.energy.current_profile, ProfileKind::Eco);
}

#[tokio::test(start_paused = true)]
async fn published_reading_feeds_current_evaluations() {
    let engine = default_engine();
    let _refresh = engine.spawn_refresh(std::sync::Arc::new(FixedSource(on_battery(0.15))));
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;

    let report = engine.evaluate_current("Truth grounds meaning.");
    assert_eq!(report.energy.current_profile, ProfileKind::Eco);
    assert_eq!(report.energy.battery_level, Some(0.15));
}
