use attune_energy::EnergyState;
use attune_intent::IntentResult;
use attune_logic::LogicResult;
use attune_resilience::{Decision, ResilienceState};
use serde::Serialize;

use crate::multimodal::ModalityReport;

/// Everything one evaluation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub intent: IntentResult,
    pub logic: LogicResult,
    pub energy: EnergyState,
    pub resilience: ResilienceState,
    pub decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<ModalityReport>,
}

impl EvaluationReport {
    pub fn is_silent(&self) -> bool {
        self.decision == Decision::Silence
    }
}
