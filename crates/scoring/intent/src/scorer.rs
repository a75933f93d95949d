//! Coherence, resonance and intent classification.

use std::sync::Arc;

use attune_ontology::OntologyGraph;
use attune_scoring_types::{
    clamp01, Advisory, CalculationDetails, MarkerTables, ProcessingBudget, Tokens, EPSILON,
};
use tracing::debug;

use crate::config::IntentConfig;
use crate::result::IntentResult;

/// Word count at which the length factor peaks.
const IDEAL_WORD_COUNT: f64 = 20.0;
/// Word counts above this are treated as this long.
const MAX_COUNTED_WORDS: usize = 40;

/// Pure, reentrant intent scorer.
#[derive(Debug, Clone)]
pub struct IntentScorer {
    ontology: Arc<OntologyGraph>,
    markers: Arc<MarkerTables>,
    config: IntentConfig,
}

struct Coherence {
    value: f64,
    relation_factor: f64,
    relations_touched: usize,
}

impl IntentScorer {
    pub fn new(
        ontology: Arc<OntologyGraph>,
        markers: Arc<MarkerTables>,
        config: IntentConfig,
    ) -> Self {
        Self {
            ontology,
            markers,
            config,
        }
    }

    pub fn config(&self) -> &IntentConfig {
        &self.config
    }

    pub fn analyze(&self, text: &str) -> IntentResult {
        self.analyze_with_budget(text, ProcessingBudget::unbounded())
    }

    /// Score at most `budget.max_tokens` tokens of `text`.
    pub fn analyze_with_budget(&self, text: &str, budget: ProcessingBudget) -> IntentResult {
        let text = budget.admit(text);
        let tokens = Tokens::tokenize(text).truncated(budget.max_tokens);
        let mut details = CalculationDetails::new();
        details.record_count("token_count", tokens.len());

        let coherence = self.coherence(text, &tokens, &mut details);
        let freedom_degree = self.freedom(&tokens, &mut details);
        let resonance_value = self.resonance(&tokens, &mut details);

        let mut result = IntentResult {
            token_count: tokens.len(),
            word_count: tokens.len(),
            coherence: coherence.value,
            freedom_degree,
            resonance_value,
            action_suitability: 0.0,
            actionable: false,
            relations_touched: coherence.relations_touched,
            advisories: Vec::new(),
            calculation_details: details,
        };
        self.settle(&mut result);

        debug!(
            tokens = result.token_count,
            coherence = result.coherence,
            relation_factor = coherence.relation_factor,
            freedom = result.freedom_degree,
            resonance = result.resonance_value,
            suitability = result.action_suitability,
            "intent scored"
        );
        result
    }

    /// Replace coherence and resonance (e.g. after folding in other
    /// modalities) and recompute everything derived from them.
    pub fn refine(&self, mut result: IntentResult, coherence: f64, resonance_value: f64) -> IntentResult {
        result.coherence = clamp01(coherence);
        result.resonance_value = resonance_value.max(0.0);
        result
            .calculation_details
            .record("coherence", result.coherence);
        result
            .calculation_details
            .record("resonance_value", result.resonance_value);
        self.settle(&mut result);
        result
    }

    fn settle(&self, result: &mut IntentResult) {
        let action_suitability =
            clamp01(0.6 * result.coherence + 0.4 * result.resonance_value.min(1.0));
        let actionable = action_suitability > self.config.threshold;

        let mut advisories = Vec::new();
        if result.coherence < self.config.coherence_threshold {
            advisories.push(Advisory::LowCoherence);
        }
        if result.resonance_value < self.config.resonance_minimum {
            advisories.push(Advisory::BelowResonanceMinimum);
        }
        if !actionable {
            advisories.push(Advisory::NotActionable);
        }

        result
            .calculation_details
            .record("action_suitability", action_suitability);
        result.action_suitability = action_suitability;
        result.actionable = actionable;
        result.advisories = advisories;
    }

    fn coherence(&self, text: &str, tokens: &Tokens, details: &mut CalculationDetails) -> Coherence {
        let token_count = tokens.len();
        let relations_touched = self.ontology.relation_count(&tokens.unique());
        details.record_count("relation_count", relations_touched);

        if token_count == 0 {
            for key in [
                "relation_factor",
                "structure_factor",
                "length_factor",
                "coherence",
            ] {
                details.record(key, 0.0);
            }
            return Coherence {
                value: 0.0,
                relation_factor: 0.0,
                relations_touched,
            };
        }

        let relation_factor =
            clamp01(relations_touched as f64 / (token_count as f64 * 0.2).max(EPSILON));

        let has_question =
            text.contains('?') || tokens.iter().any(|t| self.markers.question_words.contains(t));
        let connector_count = tokens.count_in(&self.markers.connectors);
        let connector_factor =
            clamp01(connector_count as f64 / self.config.connector_reference.max(EPSILON));
        let structure_factor =
            0.5 * if has_question { 1.0 } else { 0.0 } + 0.5 * connector_factor;

        let counted = token_count.min(MAX_COUNTED_WORDS) as f64;
        let length_factor =
            1.0 - ((counted - IDEAL_WORD_COUNT).abs() / IDEAL_WORD_COUNT).min(1.0);

        let w = self.config.coherence_weights;
        let value = clamp01(
            w.relation * relation_factor + w.structure * structure_factor + w.length * length_factor,
        );

        details.record("relation_factor", relation_factor);
        details.record_flag("has_question", has_question);
        details.record_count("connector_count", connector_count);
        details.record("connector_factor", connector_factor);
        details.record("structure_factor", structure_factor);
        details.record("length_factor", length_factor);
        details.record("coherence", value);

        Coherence {
            value,
            relation_factor,
            relations_touched,
        }
    }

    fn freedom(&self, tokens: &Tokens, details: &mut CalculationDetails) -> f64 {
        let f = self.config.freedom;
        let token_count = tokens.len();
        if token_count == 0 {
            details.record("freedom_degree", 0.0);
            return 0.0;
        }
        let n = token_count as f64;

        let has_imperative = tokens
            .first()
            .is_some_and(|t| self.markers.imperative_verbs.contains(t));
        let imperative_factor = if has_imperative {
            f.imperative_factor
        } else {
            1.0
        };

        let restrictive_count = tokens.count_in(&self.markers.restrictive);
        let restrictive_factor =
            1.0 - (f.restrictive_scale * restrictive_count as f64 / n).min(1.0);

        let open_count = tokens.count_in(&self.markers.open);
        let open_factor = (f.open_base + f.open_scale * open_count as f64 / n).min(1.0);

        let value = clamp01(
            f.imperative_weight * imperative_factor
                + f.restrictive_weight * restrictive_factor
                + f.open_weight * open_factor,
        );

        details.record_flag("has_imperative", has_imperative);
        details.record("imperative_factor", imperative_factor);
        details.record_count("restrictive_count", restrictive_count);
        details.record("restrictive_factor", restrictive_factor);
        details.record_count("open_count", open_count);
        details.record("open_factor", open_factor);
        details.record("freedom_degree", value);
        value
    }

    fn resonance(&self, tokens: &Tokens, details: &mut CalculationDetails) -> f64 {
        let token_count = tokens.len();
        let denominator = (token_count as f64 * 0.2).max(1.0);

        let mut weighted_sum = 0.0;
        for (principle, weight) in &self.config.principles {
            let score = match self.ontology.concept(principle) {
                Some(concept) if token_count > 0 => {
                    let matches = tokens.iter().filter(|t| concept.synonyms.contains(*t)).count();
                    (matches as f64 / denominator).min(1.0)
                }
                _ => 0.0,
            };
            details.record(format!("principle.{principle}"), score);
            weighted_sum += score * weight;
        }

        let anti_matches = self.ontology.antonym_hits(tokens.iter());
        let anti_factor = (1.0 - 0.3 * anti_matches as f64).max(0.0);

        let touched = self.ontology.relations_touching(&tokens.unique());
        let relation_factor_r = if touched.is_empty() {
            1.0
        } else {
            let mean = touched.iter().map(|r| r.weight).sum::<f64>() / touched.len() as f64;
            1.0 + 0.2 * mean
        };

        let value = (weighted_sum * anti_factor * relation_factor_r).max(0.0);

        details.record("weighted_sum", weighted_sum);
        details.record_count("anti_matches", anti_matches);
        details.record("anti_factor", anti_factor);
        details.record("relation_factor_r", relation_factor_r);
        details.record("resonance_value", value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> IntentScorer {
        IntentScorer::new(
            Arc::new(OntologyGraph::builtin().unwrap()),
            Arc::new(MarkerTables::english()),
            IntentConfig::default(),
        )
    }

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn empty_input_scores_zero() {
        let r = scorer().analyze("");
        assert_eq!(r.token_count, 0);
        assert_eq!(r.coherence, 0.0);
        assert_eq!(r.resonance_value, 0.0);
        assert_eq!(r.calculation_details.get("relation_factor"), Some(0.0));
        assert!(r.has_advisory(Advisory::LowCoherence));
        assert!(!r.actionable);
    }

    #[test]
    fn question_mark_alone_is_still_zero_coherence() {
        let r = scorer().analyze("?");
        assert_eq!(r.token_count, 0);
        assert_eq!(r.coherence, 0.0);
    }

    #[test]
    fn coherence_factors_are_recorded() {
        // why is truth important -> 4 tokens, 3 relations touch `truth`
        let r = scorer().analyze("Why is truth important?");
        let d = &r.calculation_details;
        assert_eq!(r.token_count, 4);
        assert_eq!(r.relations_touched, 3);
        approx(d.get("relation_factor").unwrap(), 1.0);
        approx(d.get("structure_factor").unwrap(), 0.5);
        approx(d.get("length_factor").unwrap(), 0.2);
        approx(r.coherence, 0.4 + 0.15 + 0.06);
    }

    #[test]
    fn resonance_follows_principles_and_relations() {
        let r = scorer().analyze("Why is truth important?");
        let mean = (0.9 + 0.6 + 0.8) / 3.0;
        approx(r.resonance_value, 0.2 * (1.0 + 0.2 * mean));
        approx(r.calculation_details.get("principle.truth").unwrap(), 1.0);
        approx(r.calculation_details.get("anti_factor").unwrap(), 1.0);
    }

    #[test]
    fn antonyms_dampen_resonance() {
        let s = scorer();
        let clean = s.analyze("truth matters");
        let tainted = s.analyze("truth matters, lies and deception");
        approx(tainted.calculation_details.get("anti_factor").unwrap(), 0.4);
        assert!(tainted.resonance_value < clean.resonance_value);
    }

    #[test]
    fn anti_factor_floors_at_zero() {
        let r = scorer().analyze("lie lie lie lie truth");
        assert_eq!(r.calculation_details.get("anti_factor"), Some(0.0));
        assert_eq!(r.resonance_value, 0.0);
    }

    #[test]
    fn imperative_and_restrictive_lower_freedom() {
        let s = scorer();
        let command = s.analyze("Tell me what you must do");
        let open = s.analyze("Maybe we could explore an idea");
        approx(
            command.freedom_degree,
            0.35 * 0.3 + 0.35 * (1.0 - 5.0 / 6.0) + 0.3 * 0.7,
        );
        approx(open.freedom_degree, 1.0);
    }

    #[test]
    fn length_factor_peaks_at_twenty_words() {
        let s = scorer();
        let twenty = vec!["word"; 20].join(" ");
        let fifty = vec!["word"; 50].join(" ");
        approx(s.analyze(&twenty).calculation_details.get("length_factor").unwrap(), 1.0);
        approx(s.analyze(&fifty).calculation_details.get("length_factor").unwrap(), 0.0);
    }

    #[test]
    fn connectors_saturate_at_reference() {
        let r = scorer().analyze("this and that but also because so");
        approx(r.calculation_details.get("connector_factor").unwrap(), 1.0);
    }

    #[test]
    fn budget_limits_examined_tokens() {
        let budget = ProcessingBudget {
            depth: 1,
            max_tokens: 3,
        };
        let r = scorer().analyze_with_budget("one two three truth truth", budget);
        assert_eq!(r.token_count, 3);
        assert_eq!(r.relations_touched, 0);
    }

    #[test]
    fn actionable_requires_exceeding_threshold() {
        let mut config = IntentConfig::default();
        config.threshold = 0.0;
        let s = IntentScorer::new(
            Arc::new(OntologyGraph::builtin().unwrap()),
            Arc::new(MarkerTables::english()),
            config,
        );
        let r = s.analyze("Why is truth important?");
        assert!(r.actionable);
        assert!(!r.has_advisory(Advisory::NotActionable));
        assert!(!s.analyze("").actionable);
    }

    #[test]
    fn refine_recomputes_derived_scores() {
        let s = scorer();
        let base = s.analyze("Why is truth important?");
        let refined = s.refine(base.clone(), 1.0, 1.0);
        assert_eq!(refined.coherence, 1.0);
        approx(refined.action_suitability, 1.0);
        assert!(refined.actionable);
        assert!(refined.advisories.is_empty());
        assert_eq!(refined.calculation_details.get("coherence"), Some(1.0));
        assert_eq!(refined.token_count, base.token_count);
    }

    #[test]
    fn analysis_is_deterministic() {
        let s = scorer();
        let text = "Because truth and meaning matter, we limit ourselves.";
        assert_eq!(s.analyze(text), s.analyze(text));
    }
}
