use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

/// Emotional valence used by the mismatch and negation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Valence {
    Positive,
    Negative,
    Neutral,
}

/// The eight primitive emotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Trust,
    Anticipation,
    Disgust,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Trust,
        Emotion::Anticipation,
        Emotion::Disgust,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Trust => "trust",
            Emotion::Anticipation => "anticipation",
            Emotion::Disgust => "disgust",
        }
    }

    pub fn valence(self) -> Valence {
        match self {
            Emotion::Joy | Emotion::Trust | Emotion::Anticipation => Valence::Positive,
            Emotion::Sadness | Emotion::Anger | Emotion::Fear | Emotion::Disgust => {
                Valence::Negative
            }
            Emotion::Surprise => Valence::Neutral,
        }
    }
}

/// Phrasing that signals a layered emotional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityPattern {
    Ambivalence,
    EmotionalDepth,
    EmotionalComplexity,
    EmotionalGrowth,
    EmotionalAwareness,
}

impl ComplexityPattern {
    pub const ALL: [ComplexityPattern; 5] = [
        ComplexityPattern::Ambivalence,
        ComplexityPattern::EmotionalDepth,
        ComplexityPattern::EmotionalComplexity,
        ComplexityPattern::EmotionalGrowth,
        ComplexityPattern::EmotionalAwareness,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComplexityPattern::Ambivalence => "ambivalence",
            ComplexityPattern::EmotionalDepth => "emotional_depth",
            ComplexityPattern::EmotionalComplexity => "emotional_complexity",
            ComplexityPattern::EmotionalGrowth => "emotional_growth",
            ComplexityPattern::EmotionalAwareness => "emotional_awareness",
        }
    }
}

/// Mismatch between what is stated and what is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    CognitiveEmotionalMismatch,
    StatedFeltContradiction,
    EmotionalSuppression,
    EmotionalDenial,
}

impl DiscrepancyKind {
    pub const ALL: [DiscrepancyKind; 4] = [
        DiscrepancyKind::CognitiveEmotionalMismatch,
        DiscrepancyKind::StatedFeltContradiction,
        DiscrepancyKind::EmotionalSuppression,
        DiscrepancyKind::EmotionalDenial,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DiscrepancyKind::CognitiveEmotionalMismatch => "cognitive_emotional_mismatch",
            DiscrepancyKind::StatedFeltContradiction => "stated_felt_contradiction",
            DiscrepancyKind::EmotionalSuppression => "emotional_suppression",
            DiscrepancyKind::EmotionalDenial => "emotional_denial",
        }
    }
}

macro_rules! named_kind {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = LexiconError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|k| k.name() == s)
                    .ok_or_else(|| LexiconError::UnknownName {
                        kind: $kind,
                        name: s.to_string(),
                    })
            }
        }
    };
}

named_kind!(Emotion, "emotion");
named_kind!(ComplexityPattern, "complexity pattern");
named_kind!(DiscrepancyKind, "discrepancy pattern");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for e in Emotion::ALL {
            assert_eq!(e.name().parse::<Emotion>().unwrap(), e);
        }
        assert_eq!(
            "ambivalence".parse::<ComplexityPattern>().unwrap(),
            ComplexityPattern::Ambivalence
        );
    }

    #[test]
    fn unknown_name_rejected() {
        let err = "boredom".parse::<Emotion>().unwrap_err();
        assert!(matches!(err, LexiconError::UnknownName { kind: "emotion", .. }));
    }

    #[test]
    fn valence_partition() {
        let positive: Vec<_> = Emotion::ALL
            .into_iter()
            .filter(|e| e.valence() == Valence::Positive)
            .collect();
        assert_eq!(
            positive,
            vec![Emotion::Joy, Emotion::Trust, Emotion::Anticipation]
        );
        assert_eq!(Emotion::Surprise.valence(), Valence::Neutral);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&DiscrepancyKind::StatedFeltContradiction).unwrap();
        assert_eq!(json, "\"stated_felt_contradiction\"");
    }
}
