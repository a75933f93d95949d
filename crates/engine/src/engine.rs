//! The engine facade.
//!
//! Scoring runs without locks against immutable knowledge bases. The
//! energy ledger and resilience memory live in one [`EngineState`] behind a
//! mutex that is held only for the bookkeeping steps of an evaluation.
//! The latest environment reading is published through an `RwLock<Arc<_>>`
//! so readers clone a pointer and never wait on a refresh.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use attune_energy::{
    DeltaReading, EnergyPolicy, EnergyRegulator, EnvironmentSnapshot, ProfileKind,
};
use attune_intent::{IntentResult, IntentScorer};
use attune_lexicon::EmotionLexicon;
use attune_logic::LogicScorer;
use attune_ontology::OntologyGraph;
use attune_resilience::{ResilienceMonitor, ResilienceSignals};
use attune_scoring_types::{MarkerTables, ProcessingBudget, Tokens};
use tracing::{debug, info, instrument};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::multimodal::{FusionConfig, ModalityFusion, ModalityReport, MultimodalInput};
use crate::report::EvaluationReport;
use crate::state::{EngineState, StateSnapshot};

#[derive(Debug, Clone)]
pub struct Engine {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: EngineConfig,
    intent: IntentScorer,
    logic: LogicScorer,
    regulator: EnergyRegulator,
    monitor: ResilienceMonitor,
    state: Mutex<EngineState>,
    published: RwLock<Arc<DeltaReading>>,
}

/// Profile and budget fixed for one evaluation.
struct Admission {
    reading: Arc<DeltaReading>,
    profile: ProfileKind,
    budget: ProcessingBudget,
    input_complexity: usize,
}

impl Engine {
    /// Build an engine over already loaded knowledge bases.
    pub fn new(
        config: EngineConfig,
        ontology: Arc<OntologyGraph>,
        lexicon: Arc<EmotionLexicon>,
    ) -> EngineResult<Self> {
        let regulator = EnergyRegulator::new(config.energy.clone())?;
        Self::assemble(config, ontology, lexicon, regulator)
    }

    /// Like [`Engine::new`], with a caller-supplied profile policy in place
    /// of the one selected by `energy.adaptive`.
    pub fn with_policy(
        config: EngineConfig,
        ontology: Arc<OntologyGraph>,
        lexicon: Arc<EmotionLexicon>,
        policy: Arc<dyn EnergyPolicy>,
    ) -> EngineResult<Self> {
        let regulator = EnergyRegulator::new(config.energy.clone())?.with_policy(policy);
        Self::assemble(config, ontology, lexicon, regulator)
    }

    /// Build an engine, loading knowledge bases from the configured paths
    /// or falling back to the built-in documents.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        let ontology = match &config.ontology_path {
            Some(path) => OntologyGraph::load(path)?,
            None => OntologyGraph::builtin()?,
        };
        let lexicon = match &config.patterns_path {
            Some(path) => EmotionLexicon::load(path)?,
            None => EmotionLexicon::builtin()?,
        };
        Self::new(config, Arc::new(ontology), Arc::new(lexicon))
    }

    fn assemble(
        config: EngineConfig,
        ontology: Arc<OntologyGraph>,
        lexicon: Arc<EmotionLexicon>,
        regulator: EnergyRegulator,
    ) -> EngineResult<Self> {
        config.validate()?;
        for principle in config.intent.principles.keys() {
            if ontology.concept(principle).is_none() {
                return Err(EngineError::UnknownPrinciple(principle.clone()));
            }
        }

        let markers = Arc::new(MarkerTables::for_locale(config.locale));
        let intent = IntentScorer::new(ontology, Arc::clone(&markers), config.intent.clone());
        let logic = LogicScorer::new(lexicon, &markers, config.logic.clone());
        let monitor = ResilienceMonitor::new(
            config.resilience.clone(),
            config.logic.semantic_integrity_threshold,
        )?;

        let initial = regulator.refresh_delta(&EnvironmentSnapshot::default());
        let state = EngineState::new(config.energy.default_profile);

        info!(
            locale = ?config.locale,
            policy = regulator.policy().name(),
            profile = %config.energy.default_profile,
            "engine initialized"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                intent,
                logic,
                regulator,
                monitor,
                state: Mutex::new(state),
                published: RwLock::new(Arc::new(initial)),
            }),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    pub fn regulator(&self) -> &EnergyRegulator {
        &self.inner.regulator
    }

    /// Score `text` against an explicit environment snapshot.
    #[instrument(skip(self, text, environment), fields(chars = text.len()))]
    pub fn evaluate_text(&self, text: &str, environment: &EnvironmentSnapshot) -> EvaluationReport {
        let reading = Arc::new(self.inner.regulator.refresh_delta(environment));
        self.evaluate_with_reading(text, None, reading)
    }

    /// Score `text` against the most recently published environment reading.
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub fn evaluate_current(&self, text: &str) -> EvaluationReport {
        self.evaluate_with_reading(text, None, self.current_reading())
    }

    /// Score text together with visual, audio and sensor features.
    #[instrument(skip(self, input, environment))]
    pub fn evaluate_multimodal(
        &self,
        input: &MultimodalInput,
        environment: &EnvironmentSnapshot,
    ) -> EvaluationReport {
        let reading = Arc::new(self.inner.regulator.refresh_delta(environment));
        let text = input.text.as_deref().unwrap_or("");
        self.evaluate_with_reading(text, Some(input), reading)
    }

    /// Latest published environment reading.
    pub fn current_reading(&self) -> Arc<DeltaReading> {
        let guard = self
            .inner
            .published
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Compute δ for `snapshot`, publish it, and re-select the profile.
    pub fn refresh_now(&self, snapshot: &EnvironmentSnapshot) -> Arc<DeltaReading> {
        let reading = Arc::new(self.inner.regulator.refresh_delta(snapshot));
        self.publish(Arc::clone(&reading));
        self.reselect_profile(&reading.snapshot);
        reading
    }

    /// Re-select the energy profile for `snapshot` without touching δ.
    pub fn reselect_profile(&self, snapshot: &EnvironmentSnapshot) -> ProfileKind {
        let kind = self.inner.regulator.select_profile(snapshot);
        self.lock_state()
            .energy
            .switch_profile(kind, snapshot.local_time);
        kind
    }

    pub(crate) fn publish(&self, reading: Arc<DeltaReading>) {
        let mut guard = self
            .inner
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = reading;
    }

    pub fn state_snapshot(&self) -> StateSnapshot {
        self.lock_state().snapshot()
    }

    fn lock_state(&self) -> MutexGuard<'_, EngineState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn admit(&self, text: &str, reading: Arc<DeltaReading>) -> Admission {
        let regulator = &self.inner.regulator;
        let profile = regulator.select_profile(&reading.snapshot);
        {
            let mut state = self.lock_state();
            state
                .energy
                .switch_profile(profile, reading.snapshot.local_time);
        }
        let token_count = Tokens::tokenize(text).len();
        Admission {
            budget: regulator.budget(profile, token_count),
            input_complexity: EnergyRegulator::input_complexity(token_count),
            reading,
            profile,
        }
    }

    fn fuse(
        &self,
        intent: IntentResult,
        input: Option<&MultimodalInput>,
    ) -> (IntentResult, Option<ModalityReport>) {
        let Some(input) = input else {
            return (intent, None);
        };
        let fusion: &FusionConfig = &self.inner.config.fusion;
        let report = ModalityFusion::new(fusion).fuse(input, intent.coherence, intent.resonance_value);
        let refined = self
            .inner
            .intent
            .refine(intent, report.coherence_after, report.resonance_after);
        (refined, Some(report))
    }

    fn evaluate_with_reading(
        &self,
        text: &str,
        input: Option<&MultimodalInput>,
        reading: Arc<DeltaReading>,
    ) -> EvaluationReport {
        let inner = &self.inner;
        let admission = self.admit(text, reading);

        let intent = inner.intent.analyze_with_budget(text, admission.budget);
        let (intent, modality) = self.fuse(intent, input);
        let logic = inner
            .logic
            .evaluate_with_budget(text, &intent, admission.budget);
        let processing_secs = inner.regulator.estimate_processing_secs(intent.token_count);

        let (energy, resilience) = {
            let mut state = self.lock_state();
            let energy = inner.regulator.evaluate(
                &mut state.energy,
                admission.profile,
                &admission.reading,
                logic.truth_value,
                processing_secs,
                admission.input_complexity,
            );
            let signals = ResilienceSignals {
                resonance_value: intent.resonance_value,
                truth_value: logic.truth_value,
                semantic_integrity: logic.semantic_integrity,
            };
            let resilience = inner
                .monitor
                .assess(&mut state.resilience, signals, text);
            (energy, resilience)
        };

        let decision = resilience.decision();
        debug!(
            profile = %admission.profile,
            coherence = intent.coherence,
            truth = logic.truth_value,
            ratio = energy.energy_justice_ratio,
            exit_readiness = resilience.exit_readiness,
            ?decision,
            "evaluation complete"
        );

        EvaluationReport {
            intent,
            logic,
            energy,
            resilience,
            decision,
            modality,
        }
    }
}
