use serde::{Deserialize, Serialize};

use super::language::{Language, detect_language};

const TECHNICAL_KEYWORDS: &[&str] = &[
    "algoritmo",
    "sistema",
    "proceso",
    "energía",
    "código",
    "software",
    "biología",
    "modelo",
    "ingeniería",
    "técnico",
    "científico",
    "datos",
];

const TECHNICAL_MATCH_THRESHOLD: usize = 3;
const NARRATIVE_SENTENCE_LENGTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Technical,
    Narrative,
}

/// Basic statistics about a document, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: usize,
    pub complexity: Complexity,
    pub language: Language,
}

pub fn analyze_document(text: &str) -> DocumentAnalysis {
    let clean = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let word_count = clean.split_whitespace().count();
    let sentence_count = clean
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);
    let avg_sentence_length = (word_count as f64 / sentence_count as f64).round() as usize;

    let lowered = clean.to_lowercase();
    let technical_matches = TECHNICAL_KEYWORDS
        .iter()
        .filter(|k| lowered.contains(*k))
        .count();

    let complexity = if technical_matches >= TECHNICAL_MATCH_THRESHOLD {
        Complexity::Technical
    } else if avg_sentence_length > NARRATIVE_SENTENCE_LENGTH {
        Complexity::Narrative
    } else {
        Complexity::Simple
    };

    DocumentAnalysis {
        word_count,
        sentence_count,
        avg_sentence_length,
        complexity,
        language: detect_language(&clean),
    }
}
