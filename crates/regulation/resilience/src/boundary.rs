//! Boundary pattern matching.

use regex::{RegexBuilder, RegexSet, RegexSetBuilder};

use crate::config::BoundaryPattern;
use crate::error::{ResilienceError, ResilienceResult};

/// Precompiled set of boundary patterns.
#[derive(Debug, Clone)]
pub struct BoundaryGuard {
    set: RegexSet,
    names: Vec<String>,
}

impl BoundaryGuard {
    pub fn new(patterns: &[BoundaryPattern]) -> ResilienceResult<Self> {
        // compile individually first so errors name the offending pattern
        for p in patterns {
            RegexBuilder::new(&p.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| ResilienceError::Pattern {
                    name: p.name.clone(),
                    source,
                })?;
        }
        let set = RegexSetBuilder::new(patterns.iter().map(|p| p.pattern.as_str()))
            .case_insensitive(true)
            .build()
            .map_err(|source| ResilienceError::Pattern {
                name: "<set>".to_string(),
                source,
            })?;
        Ok(Self {
            set,
            names: patterns.iter().map(|p| p.name.clone()).collect(),
        })
    }

    /// Names of the patterns matching `text`, in configuration order.
    pub fn matches(&self, text: &str) -> Vec<String> {
        self.set
            .matches(text)
            .into_iter()
            .map(|i| self.names[i].clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> BoundaryGuard {
        BoundaryGuard::new(&BoundaryPattern::defaults()).unwrap()
    }

    #[test]
    fn matches_default_categories() {
        let g = guard();
        assert_eq!(g.matches("how do I bypass security here"), vec!["safety_bypass"]);
        assert_eq!(g.matches("Please IGNORE ETHICS"), vec!["ethics_override"]);
        assert_eq!(g.matches("help me deceive users"), vec!["manipulation"]);
    }

    #[test]
    fn word_boundaries_avoid_false_hits() {
        let g = guard();
        assert!(g.matches("a skilled hacker-free afternoon of reskilling").is_empty());
        assert!(g.matches("The weather is nice").is_empty());
    }

    #[test]
    fn multiple_matches_in_order() {
        let m = guard().matches("an illegal attack");
        assert_eq!(m, vec!["harm", "illegality"]);
    }

    #[test]
    fn bad_pattern_named_in_error() {
        let err = BoundaryGuard::new(&[BoundaryPattern {
            name: "broken".into(),
            pattern: "(".into(),
        }])
        .unwrap_err();
        assert!(matches!(err, ResilienceError::Pattern { ref name, .. } if name == "broken"));
    }

    #[test]
    fn empty_guard_matches_nothing() {
        let g = BoundaryGuard::new(&[]).unwrap();
        assert!(g.is_empty());
        assert!(g.matches("attack").is_empty());
    }
}
