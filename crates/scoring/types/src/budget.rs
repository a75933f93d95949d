use serde::{Deserialize, Serialize};

/// Tokens a scorer may examine per unit of processing depth.
pub const TOKENS_PER_DEPTH: usize = 50;

/// How much of the input the scorers are allowed to look at.
///
/// Derived from the active energy profile before each evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingBudget {
    pub depth: usize,
    pub max_tokens: usize,
}

impl ProcessingBudget {
    /// No cap at all. Used when scorers run outside the engine.
    pub fn unbounded() -> Self {
        Self {
            depth: usize::MAX,
            max_tokens: usize::MAX,
        }
    }

    pub fn for_depth(depth: usize) -> Self {
        let depth = depth.max(1);
        Self {
            depth,
            max_tokens: depth.saturating_mul(TOKENS_PER_DEPTH),
        }
    }

    /// Prefix of `text` ending after the last word the budget admits.
    pub fn admit<'a>(&self, text: &'a str) -> &'a str {
        if self.max_tokens == usize::MAX {
            return text;
        }
        match crate::tokens::word_end(text, self.max_tokens) {
            Some(end) => &text[..end],
            None => text,
        }
    }
}

impl Default for ProcessingBudget {
    fn default() -> Self {
        Self::unbounded()
    }
}
