use std::fmt;

use serde::{Deserialize, Serialize};

/// Named energy profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Eco,
    #[default]
    Balanced,
    Performance,
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProfileKind::Eco => "eco",
            ProfileKind::Balanced => "balanced",
            ProfileKind::Performance => "performance",
        };
        f.write_str(s)
    }
}

/// Resource caps of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnergyProfile {
    /// Upper bound on processing depth.
    pub max_processing_depth: usize,
    /// Share of memory the scorers may use, in [0, 1].
    pub max_memory_usage: f64,
    /// Multiplier applied to energy consumed under this profile.
    pub resource_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileTable {
    pub eco: EnergyProfile,
    pub balanced: EnergyProfile,
    pub performance: EnergyProfile,
}

impl ProfileTable {
    pub fn get(&self, kind: ProfileKind) -> &EnergyProfile {
        match kind {
            ProfileKind::Eco => &self.eco,
            ProfileKind::Balanced => &self.balanced,
            ProfileKind::Performance => &self.performance,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileKind, &EnergyProfile)> {
        [
            (ProfileKind::Eco, &self.eco),
            (ProfileKind::Balanced, &self.balanced),
            (ProfileKind::Performance, &self.performance),
        ]
        .into_iter()
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self {
            eco: EnergyProfile {
                max_processing_depth: 2,
                max_memory_usage: 0.3,
                resource_weight: 0.7,
            },
            balanced: EnergyProfile {
                max_processing_depth: 5,
                max_memory_usage: 0.6,
                resource_weight: 1.0,
            },
            performance: EnergyProfile {
                max_processing_depth: 10,
                max_memory_usage: 0.9,
                resource_weight: 1.5,
            },
        }
    }
}
