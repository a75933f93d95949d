use attune_scoring_types::{Advisory, CalculationDetails};
use serde::{Deserialize, Serialize};

/// Output of [`crate::IntentScorer::analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    pub token_count: usize,
    pub word_count: usize,
    pub coherence: f64,
    pub freedom_degree: f64,
    /// Not clamped above; bounded in practice by the relation factor (<= 1.2).
    pub resonance_value: f64,
    pub action_suitability: f64,
    pub actionable: bool,
    pub relations_touched: usize,
    pub advisories: Vec<Advisory>,
    pub calculation_details: CalculationDetails,
}

impl IntentResult {
    pub fn has_advisory(&self, advisory: Advisory) -> bool {
        self.advisories.contains(&advisory)
    }
}
