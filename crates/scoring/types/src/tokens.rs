use std::collections::BTreeSet;

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '\''
}

/// Byte offset just past the `n`-th word, or `None` if the text has at
/// most `n` words.
pub(crate) fn word_end(text: &str, n: usize) -> Option<usize> {
    let mut seen = 0usize;
    let mut in_word = false;
    for (i, ch) in text.char_indices() {
        let w = is_word_char(ch);
        if in_word && !w {
            seen += 1;
            if seen == n {
                return Some(i);
            }
        }
        in_word = w;
    }
    None
}

/// Lowercased word tokens of an input text.
///
/// Any character that is neither alphanumeric nor an apostrophe separates
/// tokens, so "I'm" stays one token and "self-limitation" becomes two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens(Vec<String>);

impl Tokens {
    pub fn tokenize(text: &str) -> Self {
        Self(
            text.split(|c: char| !is_word_char(c))
                .filter(|t| !t.is_empty())
                .map(str::to_lowercase)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn unique(&self) -> BTreeSet<String> {
        self.0.iter().cloned().collect()
    }

    /// Number of tokens (with repetition) contained in `set`.
    pub fn count_in(&self, set: &BTreeSet<String>) -> usize {
        self.0.iter().filter(|t| set.contains(*t)).count()
    }

    pub fn truncated(mut self, max: usize) -> Self {
        self.0.truncate(max);
        self
    }
}
