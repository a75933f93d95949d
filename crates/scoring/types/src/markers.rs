use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Language of the marker word lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

/// Marker word lists consulted by the scorers.
///
/// All entries are lowercase single tokens, matched against [`crate::Tokens`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerTables {
    pub locale: Locale,
    pub connectors: BTreeSet<String>,
    pub question_words: BTreeSet<String>,
    pub imperative_verbs: BTreeSet<String>,
    pub restrictive: BTreeSet<String>,
    pub open: BTreeSet<String>,
    pub uncertainty: BTreeSet<String>,
    pub past: BTreeSet<String>,
    pub present: BTreeSet<String>,
    pub future: BTreeSet<String>,
}

fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl MarkerTables {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::english(),
            Locale::De => Self::german(),
        }
    }

    pub fn english() -> Self {
        Self {
            locale: Locale::En,
            connectors: set(&[
                "and", "but", "because", "therefore", "thus", "hence", "if", "then", "however",
                "although", "though", "so", "consequently",
            ]),
            question_words: set(&["what", "who", "how", "why", "where", "when", "which"]),
            imperative_verbs: set(&[
                "tell", "give", "show", "explain", "list", "make", "do", "write", "find", "stop",
                "go", "let", "help", "describe", "send", "take", "bring", "run",
            ]),
            restrictive: set(&[
                "must", "should", "shall", "only", "exclusively", "mandatory", "required",
                "necessary", "always",
            ]),
            open: set(&[
                "could", "might", "maybe", "perhaps", "possibly", "option", "options",
                "alternative", "idea", "suggestion", "possible",
            ]),
            uncertainty: set(&[
                "maybe", "perhaps", "possibly", "probably", "might", "could", "presumably",
                "unsure", "guess",
            ]),
            past: set(&[
                "was", "were", "had", "went", "yesterday", "earlier", "previously", "ago",
                "before", "once",
            ]),
            present: set(&[
                "is", "are", "am", "has", "goes", "today", "now", "currently", "presently",
            ]),
            future: set(&[
                "will", "shall", "tomorrow", "soon", "later", "eventually", "upcoming", "next",
            ]),
        }
    }

    pub fn german() -> Self {
        Self {
            locale: Locale::De,
            connectors: set(&[
                "weil", "daher", "deshalb", "folglich", "wenn", "dann", "aber", "jedoch",
                "obwohl", "trotzdem",
            ]),
            question_words: set(&[
                "was", "wer", "wie", "warum", "weshalb", "wo", "wann", "welche", "welcher",
                "welches",
            ]),
            imperative_verbs: set(&[
                "sag", "gib", "zeig", "erkläre", "mach", "schreib", "finde", "hör", "geh",
                "hilf", "beschreibe", "nenne",
            ]),
            restrictive: set(&[
                "muss", "musst", "müssen", "soll", "sollst", "sollen", "nur", "ausschließlich",
                "zwingend", "notwendig",
            ]),
            open: set(&[
                "könnte", "könnten", "vielleicht", "möglicherweise", "option", "alternative",
                "idee", "vorschlag", "möglich",
            ]),
            uncertainty: set(&[
                "vielleicht", "möglicherweise", "eventuell", "könnte", "vermutlich",
            ]),
            past: set(&["war", "hatte", "ging", "gestern", "früher", "damals", "vorher"]),
            present: set(&["ist", "hat", "geht", "heute", "jetzt", "gerade", "aktuell"]),
            future: set(&["wird", "soll", "morgen", "bald", "später", "zukünftig", "demnächst"]),
        }
    }
}

impl Default for MarkerTables {
    fn default() -> Self {
        Self::english()
    }
}
