//! Error types for attune-lexicon.

/// Errors raised while loading or compiling a pattern document.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The document is not valid JSON or does not match the schema.
    #[error("malformed pattern document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The pattern file could not be read.
    #[error("failed to read pattern file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An emotion, complexity or discrepancy name outside the closed set.
    #[error("unknown {kind} name '{name}'")]
    UnknownName { kind: &'static str, name: String },

    /// A required entry of the closed set is absent.
    #[error("missing {kind} entry '{name}'")]
    MissingEntry { kind: &'static str, name: String },

    /// An emotion is defined without any pattern.
    #[error("emotion '{0}' has no detection patterns")]
    NoPatterns(String),

    /// A pattern failed to compile.
    #[error("pattern for '{name}' failed to compile: {source}")]
    Regex {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// An intensity scale value is outside the unit interval.
    #[error("intensity scale value '{field}' = {value} outside [0, 1]")]
    IntensityScale { field: &'static str, value: f64 },
}

pub type LexiconResult<T> = Result<T, LexiconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_display() {
        let e = LexiconError::UnknownName {
            kind: "emotion",
            name: "boredom".into(),
        };
        assert_eq!(e.to_string(), "unknown emotion name 'boredom'");
    }

    #[test]
    fn missing_entry_display() {
        let e = LexiconError::MissingEntry {
            kind: "discrepancy pattern",
            name: "emotional_denial".into(),
        };
        assert!(e.to_string().contains("emotional_denial"));
    }

    #[test]
    fn regex_error_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let e = LexiconError::Regex {
            name: "joy".into(),
            source,
        };
        assert!(e.to_string().starts_with("pattern for 'joy'"));
    }
}
