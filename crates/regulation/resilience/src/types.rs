use std::fmt;

use serde::{Deserialize, Serialize};

/// Exit-readiness band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    #[default]
    Active,
    Cautionary,
    VoluntarySilence,
}

impl Band {
    pub fn decision(self) -> Decision {
        match self {
            Band::Active => Decision::Respond,
            Band::Cautionary => Decision::Warn,
            Band::VoluntarySilence => Decision::Silence,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Band::Active => "active",
            Band::Cautionary => "cautionary",
            Band::VoluntarySilence => "voluntary_silence",
        };
        f.write_str(s)
    }
}

/// What the caller should do with this evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Respond,
    /// Respond, but surface a degradation warning.
    Warn,
    /// Deliberately withhold a substantive response.
    Silence,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerReason {
    ResonanceCollapse,
    EthicalCorruption,
    BoundaryViolation,
    #[default]
    None,
}

/// Outcome of one resilience assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResilienceState {
    pub exit_readiness: f64,
    pub band: Band,
    pub last_trigger_reason: TriggerReason,
    pub collapse_signal: f64,
    pub corruption_signal: f64,
    /// Names of boundary patterns the input matched.
    pub boundary_matches: Vec<String>,
}

impl ResilienceState {
    pub fn decision(&self) -> Decision {
        self.band.decision()
    }
}
