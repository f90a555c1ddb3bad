use crate::domain::SummaryType;

use super::pipeline_error::PipelineError;

pub const DEFAULT_MIN_TEXT_CHARS: usize = 100;
pub const SUMMARY_WORD_CAP: usize = 300;
/// Sources at least this long may exceed the word cap when a detailed summary is asked for.
pub const LONG_SOURCE_WORDS: usize = 1500;

const SYSTEM_PROMPT: &str = "\
You are an intelligent agent specialized in summarizing long documents written in Spanish.
Your task is to produce coherent, concise and accurate summaries of text extracted from PDF or DOCX documents.

RULES:
- Write the summary in neutral, formal Spanish with a natural tone.
- Capture the main ideas, the relationships between concepts and the most relevant conclusions.
- Avoid redundancy, repetition and unnecessary explanations.
- Prefer a mixed technique: select key sentences (extractive) and rewrite content (abstractive).
- Do not invent information or add content that is not in the document.
- Do not include personal opinions or fabricated examples.

RESPONSE FORMAT:
Respond only with a JSON object with these fields:
- \"summaryTitle\": a short suggested title for the summary, in Spanish.
- \"summaryText\": the summary itself.
- \"summaryMethod\": one of \"extractive\", \"abstractive\" or \"mixed\", whichever technique dominated.
Do not add explanations or describe your process.";

/// Opaque payload for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInstructions {
    pub system_prompt: String,
    pub user_prompt: String,
    pub summary_type: SummaryType,
    pub custom_length: Option<String>,
    pub word_cap: Option<usize>,
}

/// Maps a summary type onto generation instructions. Pure: no I/O, no state.
#[derive(Debug, Clone, Copy)]
pub struct SummaryRequestBuilder {
    min_text_chars: usize,
}

impl Default for SummaryRequestBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TEXT_CHARS)
    }
}

impl SummaryRequestBuilder {
    pub fn new(min_text_chars: usize) -> Self {
        Self { min_text_chars }
    }

    pub fn validate_length(&self, document_text: &str) -> Result<(), PipelineError> {
        if document_text.trim().chars().count() < self.min_text_chars {
            return Err(PipelineError::TextTooShort {
                min_chars: self.min_text_chars,
            });
        }
        Ok(())
    }

    /// The requested length for custom summaries, trimmed; `None` for the
    /// preset types. Cheap enough to run before any model call.
    pub fn validate_custom_length(
        &self,
        summary_type: SummaryType,
        custom_length: Option<&str>,
    ) -> Result<Option<String>, PipelineError> {
        if summary_type != SummaryType::Custom {
            return Ok(None);
        }
        custom_length
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| Some(l.to_string()))
            .ok_or_else(|| PipelineError::invalid_input(PipelineError::MISSING_CUSTOM_LENGTH))
    }

    pub fn build(
        &self,
        document_text: &str,
        summary_type: SummaryType,
        custom_length: Option<&str>,
    ) -> Result<GenerationInstructions, PipelineError> {
        self.validate_length(document_text)?;
        let custom_length = self.validate_custom_length(summary_type, custom_length)?;

        let document_text = document_text.trim();
        let source_words = document_text.split_whitespace().count();
        let word_cap = if summary_type == SummaryType::Detailed && source_words >= LONG_SOURCE_WORDS
        {
            None
        } else {
            Some(SUMMARY_WORD_CAP)
        };

        let mut user_prompt = format!(
            "SUMMARY TYPE: {}\nLENGTH POLICY: {}\n",
            summary_type,
            length_policy(summary_type, custom_length.as_deref())
        );
        match word_cap {
            Some(cap) => user_prompt.push_str(&format!(
                "WORD LIMIT: the summary must not exceed {cap} words.\n"
            )),
            None => user_prompt.push_str(
                "WORD LIMIT: the source is long and a detailed summary was requested; \
                 you may exceed 300 words when needed.\n",
            ),
        }
        user_prompt.push_str("\nDOCUMENT TEXT:\n");
        user_prompt.push_str(document_text);

        Ok(GenerationInstructions {
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt,
            summary_type,
            custom_length,
            word_cap,
        })
    }
}

fn length_policy(summary_type: SummaryType, custom_length: Option<&str>) -> String {
    match (summary_type, custom_length) {
        (SummaryType::Detailed, _) => "Include every key point, full explanations and relevant \
             examples. Aim for roughly 30% of the original length."
            .to_string(),
        (SummaryType::Medium, _) => "Cover the main ideas and essential concepts with an \
             intermediate level of detail. Aim for roughly 20-25% of the original length."
            .to_string(),
        (SummaryType::Short, _) => "Keep only the most important ideas. Aim for roughly \
             10-15% of the original length."
            .to_string(),
        (SummaryType::Custom, length) => format!(
            "Follow the user's requested length exactly: \"{}\". This overrides any percentage target.",
            length.unwrap_or_default()
        ),
    }
}
