use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Every intermediate factor of a score, keyed by name.
///
/// Keys are kept sorted so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationDetails(BTreeMap<String, f64>);

impl CalculationDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    pub fn record_count(&mut self, name: impl Into<String>, count: usize) {
        self.record(name, count as f64);
    }

    pub fn record_flag(&mut self, name: impl Into<String>, flag: bool) {
        self.record(name, if flag { 1.0 } else { 0.0 });
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
