//! Compiled emotion lexicon.
//!
//! Every pattern is compiled once at load time. Detection only reads.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::{debug, info};

use crate::document::{IntensityScale, LexiconDocument};
use crate::error::{LexiconError, LexiconResult};
use crate::kinds::{ComplexityPattern, DiscrepancyKind, Emotion};

const BUILTIN_PATTERNS: &str = include_str!("../data/emotion_patterns.json");

/// Words on either side of a match that are checked for intensity modifiers.
const MODIFIER_WINDOW: usize = 5;

#[derive(Debug, Clone)]
struct CompiledEmotion {
    patterns: Vec<Regex>,
    high: BTreeSet<String>,
    low: BTreeSet<String>,
}

/// Outcome of matching one emotion against a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionMatch {
    pub hits: usize,
    pub intensity: f64,
}

/// Compiled pattern tables. Immutable once built.
#[derive(Debug, Clone)]
pub struct EmotionLexicon {
    emotions: BTreeMap<Emotion, CompiledEmotion>,
    complexity: Vec<(ComplexityPattern, Regex)>,
    discrepancy: Vec<(DiscrepancyKind, Regex)>,
    negations: BTreeSet<String>,
    scale: IntensityScale,
}

fn compile(name: &str, pattern: &str) -> LexiconResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| LexiconError::Regex {
            name: name.to_string(),
            source,
        })
}

fn lowered(words: &[String]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

/// Byte spans of words: runs of alphanumerics and apostrophes.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, ch) in text.char_indices() {
        let in_word = ch.is_alphanumeric() || ch == '\'';
        match (in_word, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

impl EmotionLexicon {
    /// The English tables shipped with this crate.
    pub fn builtin() -> LexiconResult<Self> {
        Self::from_json_str(BUILTIN_PATTERNS)
    }

    pub fn from_json_str(json: &str) -> LexiconResult<Self> {
        let doc: LexiconDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    pub fn load(path: impl AsRef<Path>) -> LexiconResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let lexicon = Self::from_json_str(&raw)?;
        info!(path = %path.display(), "emotion patterns loaded");
        Ok(lexicon)
    }

    pub fn from_document(doc: LexiconDocument) -> LexiconResult<Self> {
        for (field, value) in [
            ("high", doc.intensity_scale.high),
            ("default", doc.intensity_scale.default),
            ("low", doc.intensity_scale.low),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(LexiconError::IntensityScale { field, value });
            }
        }

        let mut emotions = BTreeMap::new();
        for (name, spec) in doc.emotions {
            let emotion: Emotion = name.parse()?;
            if spec.patterns.is_empty() {
                return Err(LexiconError::NoPatterns(name));
            }
            let patterns = spec
                .patterns
                .iter()
                .map(|p| compile(&name, p))
                .collect::<LexiconResult<Vec<_>>>()?;
            emotions.insert(
                emotion,
                CompiledEmotion {
                    patterns,
                    high: lowered(&spec.intensity_modifiers.high),
                    low: lowered(&spec.intensity_modifiers.low),
                },
            );
        }
        if let Some(missing) = Emotion::ALL.into_iter().find(|e| !emotions.contains_key(e)) {
            return Err(LexiconError::MissingEntry {
                kind: "emotion",
                name: missing.name().to_string(),
            });
        }

        let mut complexity = Vec::new();
        for (name, spec) in &doc.complexity_patterns {
            let kind: ComplexityPattern = name.parse()?;
            complexity.push((kind, compile(name, &spec.pattern)?));
        }
        complexity.sort_by_key(|(k, _)| *k);
        if let Some(missing) = ComplexityPattern::ALL
            .into_iter()
            .find(|k| !complexity.iter().any(|(c, _)| c == k))
        {
            return Err(LexiconError::MissingEntry {
                kind: "complexity pattern",
                name: missing.name().to_string(),
            });
        }

        let mut discrepancy = Vec::new();
        for (name, spec) in &doc.discrepancy_patterns {
            let kind: DiscrepancyKind = name.parse()?;
            discrepancy.push((kind, compile(name, &spec.pattern)?));
        }
        discrepancy.sort_by_key(|(k, _)| *k);
        if let Some(missing) = DiscrepancyKind::ALL
            .into_iter()
            .find(|k| !discrepancy.iter().any(|(d, _)| d == k))
        {
            return Err(LexiconError::MissingEntry {
                kind: "discrepancy pattern",
                name: missing.name().to_string(),
            });
        }

        debug!(
            negations = doc.negations.len(),
            "emotion lexicon compiled"
        );

        Ok(Self {
            emotions,
            complexity,
            discrepancy,
            negations: lowered(&doc.negations),
            scale: doc.intensity_scale,
        })
    }

    pub fn intensity_scale(&self) -> IntensityScale {
        self.scale
    }

    /// Detected emotions with their intensity.
    ///
    /// For each pattern match the words within five positions of the match
    /// are checked against the emotion's modifier lists. The strongest
    /// resulting intensity across all matches is kept.
    pub fn detect_emotions(&self, text: &str) -> BTreeMap<Emotion, EmotionMatch> {
        let spans = word_spans(text);
        let words: Vec<String> = spans
            .iter()
            .map(|&(s, e)| text[s..e].to_lowercase())
            .collect();

        let mut found = BTreeMap::new();
        for (&emotion, compiled) in &self.emotions {
            let mut hits = 0usize;
            let mut intensity: Option<f64> = None;
            for pattern in &compiled.patterns {
                for m in pattern.find_iter(text) {
                    hits += 1;
                    let value = self.window_intensity(compiled, &spans, &words, m.start(), m.end());
                    intensity = Some(intensity.map_or(value, |v: f64| v.max(value)));
                }
            }
            if let Some(intensity) = intensity {
                found.insert(emotion, EmotionMatch { hits, intensity });
            }
        }
        found
    }

    fn window_intensity(
        &self,
        compiled: &CompiledEmotion,
        spans: &[(usize, usize)],
        words: &[String],
        start: usize,
        end: usize,
    ) -> f64 {
        let first = spans.iter().position(|&(_, e)| e > start);
        let last = spans.iter().rposition(|&(s, _)| s < end);
        let (Some(first), Some(last)) = (first, last) else {
            return self.scale.default;
        };
        let lo = first.saturating_sub(MODIFIER_WINDOW);
        let hi = (last + MODIFIER_WINDOW + 1).min(words.len());
        let window = &words[lo..hi];

        if window.iter().any(|w| compiled.high.contains(w)) {
            self.scale.high
        } else if window.iter().any(|w| compiled.low.contains(w)) {
            self.scale.low
        } else {
            self.scale.default
        }
    }

    pub fn detect_complexity(&self, text: &str) -> BTreeSet<ComplexityPattern> {
        self.complexity
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(k, _)| *k)
            .collect()
    }

    pub fn detect_discrepancies(&self, text: &str) -> BTreeSet<DiscrepancyKind> {
        self.discrepancy
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(k, _)| *k)
            .collect()
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }

    /// True if any word of `text` is a negation marker.
    pub fn contains_negation(&self, text: &str) -> bool {
        word_spans(text)
            .into_iter()
            .any(|(s, e)| self.negations.contains(&text[s..e].to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> EmotionLexicon {
        EmotionLexicon::builtin().unwrap()
    }

    #[test]
    fn builtin_covers_every_kind() {
        let lex = lexicon();
        assert_eq!(lex.emotions.len(), Emotion::ALL.len());
        assert_eq!(lex.complexity.len(), ComplexityPattern::ALL.len());
        assert_eq!(lex.discrepancy.len(), DiscrepancyKind::ALL.len());
    }

    #[test]
    fn detects_joy_and_sadness() {
        let found = lexicon().detect_emotions("I am happy, although I am sad.");
        let kinds: Vec<Emotion> = found.keys().copied().collect();
        assert_eq!(kinds, vec![Emotion::Joy, Emotion::Sadness]);
        assert_eq!(found[&Emotion::Joy].intensity, 0.5);
    }

    #[test]
    fn tired_is_not_an_emotion_term() {
        let found = lexicon().detect_emotions("I am happy, although I am tired.");
        assert_eq!(found.keys().copied().collect::<Vec<_>>(), vec![Emotion::Joy]);
    }

    #[test]
    fn high_modifier_in_window_raises_intensity() {
        let found = lexicon().detect_emotions("Today I am really very happy");
        assert_eq!(found[&Emotion::Joy].intensity, 0.9);
    }

    #[test]
    fn low_modifier_lowers_intensity() {
        let found = lexicon().detect_emotions("I feel a little sad");
        assert_eq!(found[&Emotion::Sadness].intensity, 0.2);
    }

    #[test]
    fn modifier_outside_window_is_ignored() {
        let text = "very much later on we walked home and then I was happy";
        let found = lexicon().detect_emotions(text);
        assert_eq!(found[&Emotion::Joy].intensity, 0.5);
    }

    #[test]
    fn strongest_match_wins() {
        let found = lexicon().detect_emotions("slightly glad at first. much later, extremely happy");
        let joy = found[&Emotion::Joy];
        assert_eq!(joy.hits, 2);
        assert_eq!(joy.intensity, 0.9);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(lexicon()
            .detect_emotions("HAPPY")
            .contains_key(&Emotion::Joy));
    }

    #[test]
    fn complexity_and_discrepancy() {
        let lex = lexicon();
        let text = "I am happy, although I am sad.";
        assert!(lex
            .detect_complexity(text)
            .contains(&ComplexityPattern::Ambivalence));
        assert!(lex
            .detect_discrepancies(text)
            .contains(&DiscrepancyKind::StatedFeltContradiction));
        assert!(lex.detect_discrepancies("the weather").is_empty());
    }

    #[test]
    fn negation_lookup() {
        let lex = lexicon();
        assert!(lex.contains_negation("I don't feel happy"));
        assert!(!lex.contains_negation("I feel happy"));
        assert!(lex.is_negation("never"));
    }

    #[test]
    fn missing_emotion_fails_load() {
        let mut doc: LexiconDocument = serde_json::from_str(BUILTIN_PATTERNS).unwrap();
        doc.emotions.remove("disgust");
        let err = EmotionLexicon::from_document(doc).unwrap_err();
        assert!(matches!(err, LexiconError::MissingEntry { kind: "emotion", .. }));
    }

    #[test]
    fn unknown_discrepancy_fails_load() {
        let mut doc: LexiconDocument = serde_json::from_str(BUILTIN_PATTERNS).unwrap();
        doc.discrepancy_patterns.insert(
            "sarcasm".into(),
            crate::document::PatternSpec {
                pattern: "yeah right".into(),
            },
        );
        let err = EmotionLexicon::from_document(doc).unwrap_err();
        assert!(matches!(err, LexiconError::UnknownName { .. }));
    }

    #[test]
    fn bad_regex_fails_load() {
        let mut doc: LexiconDocument = serde_json::from_str(BUILTIN_PATTERNS).unwrap();
        if let Some(joy) = doc.emotions.get_mut("joy") {
            joy.patterns.push("(unclosed".into());
        }
        let err = EmotionLexicon::from_document(doc).unwrap_err();
        assert!(matches!(err, LexiconError::Regex { .. }));
    }

    #[test]
    fn out_of_range_scale_fails_load() {
        let mut doc: LexiconDocument = serde_json::from_str(BUILTIN_PATTERNS).unwrap();
        doc.intensity_scale.high = 1.4;
        let err = EmotionLexicon::from_document(doc).unwrap_err();
        assert!(matches!(err, LexiconError::IntensityScale { field: "high", .. }));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patterns.json");
        std::fs::write(&path, BUILTIN_PATTERNS).unwrap();
        assert!(EmotionLexicon::load(&path).is_ok());
    }

    #[test]
    fn word_spans_keep_apostrophes() {
        let text = "don't stop";
        let words: Vec<&str> = word_spans(text).iter().map(|&(s, e)| &text[s..e]).collect();
        assert_eq!(words, vec!["don't", "stop"]);
    }
}
