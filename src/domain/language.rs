use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Closed-class Spanish words: articles, prepositions and conjunctions that
/// appear in almost any Spanish sentence regardless of topic.
const SPANISH_FUNCTION_WORDS: &[&str] = &[
    "el", "la", "de", "que", "y", "en", "un", "una", "los", "las", "del", "por", "con", "para",
    "es", "se",
];

const MIN_DISTINCT_MATCHES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    Unknown,
}

pub fn distinct_function_word_matches(text: &str) -> usize {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|token| SPANISH_FUNCTION_WORDS.contains(token))
        .collect::<HashSet<_>>()
        .len()
}

/// Offline Spanish check: at least two distinct function words as whole tokens.
pub fn looks_spanish(text: &str) -> bool {
    distinct_function_word_matches(text) >= MIN_DISTINCT_MATCHES
}

pub fn detect_language(text: &str) -> Language {
    if looks_spanish(text) {
        Language::Es
    } else {
        Language::Unknown
    }
}
