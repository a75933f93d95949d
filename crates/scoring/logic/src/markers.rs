use std::collections::BTreeSet;
use std::fmt::Debug;

use attune_scoring_types::{CalculationDetails, MarkerTables, Tokens};

/// Score produced by a marker-based sub-scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerScore {
    pub value: f64,
    /// Optional qualitative reading, e.g. the dominant temporal orientation.
    pub label: Option<String>,
}

/// A [0, 1] sub-score computed from marker word counts.
pub trait MarkerScorer: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Score `tokens`, recording intermediate counts into `details`.
    fn score(&self, tokens: &Tokens, details: &mut CalculationDetails) -> MarkerScore;
}

/// Share of hedging tokens in the input.
#[derive(Debug, Clone)]
pub struct UncertaintyScorer {
    markers: BTreeSet<String>,
}

impl UncertaintyScorer {
    pub fn new(markers: BTreeSet<String>) -> Self {
        Self { markers }
    }

    pub fn from_tables(tables: &MarkerTables) -> Self {
        Self::new(tables.uncertainty.clone())
    }
}

impl MarkerScorer for UncertaintyScorer {
    fn name(&self) -> &'static str {
        "uncertainty"
    }

    fn score(&self, tokens: &Tokens, details: &mut CalculationDetails) -> MarkerScore {
        let count = tokens.count_in(&self.markers);
        details.record_count("uncertainty_markers", count);
        let value = if tokens.is_empty() {
            0.0
        } else {
            (count as f64 / tokens.len() as f64).min(1.0)
        };
        MarkerScore { value, label: None }
    }
}

/// Confidence in the dominant temporal orientation.
///
/// With no temporal markers at all the confidence is 0.5.
#[derive(Debug, Clone)]
pub struct TemporalScorer {
    past: BTreeSet<String>,
    present: BTreeSet<String>,
    future: BTreeSet<String>,
}

impl TemporalScorer {
    pub fn new(past: BTreeSet<String>, present: BTreeSet<String>, future: BTreeSet<String>) -> Self {
        Self {
            past,
            present,
            future,
        }
    }

    pub fn from_tables(tables: &MarkerTables) -> Self {
        Self::new(
            tables.past.clone(),
            tables.present.clone(),
            tables.future.clone(),
        )
    }
}

impl MarkerScorer for TemporalScorer {
    fn name(&self) -> &'static str {
        "temporal_confidence"
    }

    fn score(&self, tokens: &Tokens, details: &mut CalculationDetails) -> MarkerScore {
        let past = tokens.count_in(&self.past);
        let present = tokens.count_in(&self.present);
        let future = tokens.count_in(&self.future);
        details.record_count("past_markers", past);
        details.record_count("present_markers", present);
        details.record_count("future_markers", future);

        let total = past + present + future;
        if total == 0 {
            return MarkerScore {
                value: 0.5,
                label: None,
            };
        }
        // ties favour past, then future
        let orientation = if past >= present && past >= future {
            "past"
        } else if future >= present {
            "future"
        } else {
            "present"
        };
        let dominant = past.max(present).max(future);
        MarkerScore {
            value: dominant as f64 / total as f64,
            label: Some(orientation.to_string()),
        }
    }
}
