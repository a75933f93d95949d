//! Truth value, emotional depth and discrepancy scoring.

use std::collections::BTreeMap;
use std::sync::Arc;

use attune_intent::IntentResult;
use attune_lexicon::{ComplexityPattern, DiscrepancyKind, Emotion, EmotionLexicon, Valence};
use attune_scoring_types::{
    clamp01, Advisory, CalculationDetails, MarkerTables, ProcessingBudget, Tokens,
};
use tracing::debug;

use crate::config::LogicConfig;
use crate::markers::{MarkerScorer, TemporalScorer, UncertaintyScorer};
use crate::result::{Discrepancy, EmotionalDepth, LogicResult};

/// Pure, reentrant logic scorer.
#[derive(Debug, Clone)]
pub struct LogicScorer {
    lexicon: Arc<EmotionLexicon>,
    uncertainty: Arc<dyn MarkerScorer>,
    temporal: Arc<dyn MarkerScorer>,
    config: LogicConfig,
}

impl LogicScorer {
    /// Scorer with the marker-table based uncertainty and temporal sub-scorers.
    pub fn new(lexicon: Arc<EmotionLexicon>, markers: &MarkerTables, config: LogicConfig) -> Self {
        Self {
            lexicon,
            uncertainty: Arc::new(UncertaintyScorer::from_tables(markers)),
            temporal: Arc::new(TemporalScorer::from_tables(markers)),
            config,
        }
    }

    pub fn with_uncertainty(mut self, scorer: Arc<dyn MarkerScorer>) -> Self {
        self.uncertainty = scorer;
        self
    }

    pub fn with_temporal(mut self, scorer: Arc<dyn MarkerScorer>) -> Self {
        self.temporal = scorer;
        self
    }

    pub fn config(&self) -> &LogicConfig {
        &self.config
    }

    pub fn evaluate(&self, text: &str, intent: &IntentResult) -> LogicResult {
        self.evaluate_with_budget(text, intent, ProcessingBudget::unbounded())
    }

    pub fn evaluate_with_budget(
        &self,
        text: &str,
        intent: &IntentResult,
        budget: ProcessingBudget,
    ) -> LogicResult {
        let text = budget.admit(text);
        let tokens = Tokens::tokenize(text).truncated(budget.max_tokens);
        let mut details = CalculationDetails::new();

        let detected = self.lexicon.detect_emotions(text);
        let emotional_depth = self.emotional_depth(text, &detected, &mut details);
        let discrepancy = self.discrepancy(text, &emotional_depth, &mut details);

        let uncertainty = self.uncertainty.score(&tokens, &mut details);
        let temporal = self.temporal.score(&tokens, &mut details);
        let uncertainty_value = clamp01(uncertainty.value);
        let temporal_confidence = clamp01(temporal.value);

        let w = self.config.truth_weights;
        let raw_truth = w.coherence * intent.coherence
            + w.certainty * (1.0 - uncertainty_value)
            + w.temporal * temporal_confidence
            + w.depth * emotional_depth.depth_score
            - w.discrepancy * discrepancy.discrepancy_score;
        let truth_value = clamp01(raw_truth);
        let semantic_integrity = truth_value - self.config.semantic_integrity_threshold;

        details.record("coherence", intent.coherence);
        details.record("uncertainty", uncertainty_value);
        details.record("temporal_confidence", temporal_confidence);
        details.record("truth_raw", raw_truth);
        details.record("truth_value", truth_value);
        details.record("semantic_integrity", semantic_integrity);

        let mut advisories = Vec::new();
        if truth_value < self.config.truth_threshold {
            advisories.push(Advisory::TruthBelowThreshold);
        }

        debug!(
            truth = truth_value,
            raw = raw_truth,
            depth = emotional_depth.depth_score,
            discrepancy = discrepancy.discrepancy_score,
            uncertainty = uncertainty_value,
            temporal = temporal_confidence,
            "logic scored"
        );

        LogicResult {
            truth_value,
            semantic_integrity,
            uncertainty: uncertainty_value,
            temporal_confidence,
            temporal_orientation: temporal.label,
            emotional_depth,
            discrepancy,
            advisories,
            calculation_details: details,
        }
    }

    fn emotional_depth(
        &self,
        text: &str,
        detected: &BTreeMap<Emotion, attune_lexicon::EmotionMatch>,
        details: &mut CalculationDetails,
    ) -> EmotionalDepth {
        let variety = detected.len() as f64 / Emotion::ALL.len() as f64;
        let intensity = if detected.is_empty() {
            0.0
        } else {
            detected.values().map(|m| m.intensity).sum::<f64>() / detected.len() as f64
        };
        let complexity_patterns = self.lexicon.detect_complexity(text);
        let complexity = complexity_patterns.len() as f64 / ComplexityPattern::ALL.len() as f64;

        let w = self.config.depth_weights;
        let depth_score =
            clamp01(w.variety * variety + w.intensity * intensity + w.complexity * complexity);

        details.record("variety", variety);
        details.record("intensity", intensity);
        details.record("complexity", complexity);
        details.record("depth_score", depth_score);
        for (emotion, m) in detected {
            details.record(format!("emotion.{emotion}"), m.intensity);
        }

        EmotionalDepth {
            variety,
            intensity,
            complexity,
            depth_score,
            emotions: detected.iter().map(|(e, m)| (*e, m.intensity)).collect(),
            complexity_patterns,
        }
    }

    fn discrepancy(
        &self,
        text: &str,
        depth: &EmotionalDepth,
        details: &mut CalculationDetails,
    ) -> Discrepancy {
        let kinds = self.lexicon.detect_discrepancies(text);
        let ratio = kinds.len() as f64 / DiscrepancyKind::ALL.len() as f64;

        let has_valence =
            |v: Valence| depth.emotions.keys().any(|e| e.valence() == v);
        let positive = has_valence(Valence::Positive);
        let negative = has_valence(Valence::Negative);

        let emotion_mismatch = if positive && negative { 1.0 } else { 0.0 };
        let negation_with_positive = if positive && self.lexicon.contains_negation(text) {
            1.0
        } else {
            0.0
        };

        let w = self.config.discrepancy_weights;
        let discrepancy_score = clamp01(
            w.ratio * ratio
                + w.emotion_mismatch * emotion_mismatch
                + w.negation_with_positive * negation_with_positive,
        );

        details.record("discrepancy_ratio", ratio);
        details.record("emotion_mismatch", emotion_mismatch);
        details.record("negation_with_positive", negation_with_positive);
        details.record("discrepancy_score", discrepancy_score);

        Discrepancy {
            ratio,
            emotion_mismatch,
            negation_with_positive,
            discrepancy_score,
            kinds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attune_intent::{IntentConfig, IntentScorer};
    use attune_ontology::OntologyGraph;

    struct Fixture {
        intent: IntentScorer,
        logic: LogicScorer,
    }

    impl Fixture {
        fn new() -> Self {
            let markers = MarkerTables::english();
            Self {
                intent: IntentScorer::new(
                    Arc::new(OntologyGraph::builtin().unwrap()),
                    Arc::new(markers.clone()),
                    IntentConfig::default(),
                ),
                logic: LogicScorer::new(
                    Arc::new(EmotionLexicon::builtin().unwrap()),
                    &markers,
                    LogicConfig::default(),
                ),
            }
        }

        fn run(&self, text: &str) -> LogicResult {
            let intent = self.intent.analyze(text);
            self.logic.evaluate(text, &intent)
        }
    }

    #[test]
    fn mixed_emotions_raise_discrepancy_and_lower_truth() {
        let f = Fixture::new();
        let mixed = f.run("I am happy, although I am sad.");
        let single = f.run("I am happy, although I am tired.");

        assert_eq!(mixed.emotional_depth.emotions.len(), 2);
        assert_eq!(mixed.discrepancy.emotion_mismatch, 1.0);
        assert_eq!(single.discrepancy.emotion_mismatch, 0.0);
        assert!(mixed.emotional_depth.depth_score > 0.0);
        assert!(mixed.discrepancy.discrepancy_score > 0.0);
        assert!(mixed.discrepancy.discrepancy_score > single.discrepancy.discrepancy_score);
        assert!(mixed.truth_value < single.truth_value);
    }

    #[test]
    fn depth_breakdown() {
        let r = Fixture::new().run("I am happy, although I am sad.");
        let d = &r.emotional_depth;
        assert_eq!(d.variety, 2.0 / 8.0);
        assert_eq!(d.intensity, 0.5);
        assert_eq!(d.complexity, 1.0 / 5.0);
        let expected = 0.4 * 0.25 + 0.3 * 0.5 + 0.3 * 0.2;
        assert!((d.depth_score - expected).abs() < 1e-12);
    }

    #[test]
    fn negation_with_positive_emotion() {
        let f = Fixture::new();
        let r = f.run("I am not happy");
        assert_eq!(r.discrepancy.negation_with_positive, 1.0);
        let r = f.run("I am not sad");
        assert_eq!(r.discrepancy.negation_with_positive, 0.0);
    }

    #[test]
    fn empty_input_is_well_defined() {
        let r = Fixture::new().run("");
        assert_eq!(r.uncertainty, 0.0);
        assert_eq!(r.temporal_confidence, 0.5);
        assert_eq!(r.emotional_depth.depth_score, 0.0);
        // 0.2 * (1 - 0) + 0.2 * 0.5
        assert!((r.truth_value - 0.3).abs() < 1e-12);
        assert!(r.semantic_integrity < 0.0);
        assert!(r.advisories.contains(&Advisory::TruthBelowThreshold));
    }

    #[test]
    fn truth_is_clamped_at_the_top() {
        let mut config = LogicConfig::default();
        config.truth_weights.certainty = 5.0;
        let markers = MarkerTables::english();
        let logic = LogicScorer::new(Arc::new(EmotionLexicon::builtin().unwrap()), &markers, config);
        let f = Fixture::new();
        let intent = f.intent.analyze("plain words");
        let r = logic.evaluate("plain words", &intent);
        assert_eq!(r.truth_value, 1.0);
        assert!(r.calculation_details.get("truth_raw").unwrap() > 1.0);
    }

    #[derive(Debug)]
    struct Fixed(f64);

    impl MarkerScorer for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn score(&self, _: &Tokens, _: &mut CalculationDetails) -> crate::MarkerScore {
            crate::MarkerScore {
                value: self.0,
                label: None,
            }
        }
    }

    #[test]
    fn sub_scorers_are_pluggable() {
        let f = Fixture::new();
        let logic = f.logic.clone().with_uncertainty(Arc::new(Fixed(1.0)));
        let intent = f.intent.analyze("the sky");
        let r = logic.evaluate("the sky", &intent);
        assert_eq!(r.uncertainty, 1.0);
        assert!(r.truth_value < f.logic.evaluate("the sky", &intent).truth_value);
    }

    #[test]
    fn discrepancy_kinds_are_reported() {
        let r = Fixture::new().run("I'm fine, I am holding back a lot");
        assert!(r.discrepancy.kinds.contains(&DiscrepancyKind::EmotionalDenial));
        assert!(r.discrepancy.kinds.contains(&DiscrepancyKind::EmotionalSuppression));
        assert_eq!(r.discrepancy.ratio, 0.5);
    }
}
