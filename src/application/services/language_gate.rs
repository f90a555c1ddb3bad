use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LanguageClassifier;
use crate::domain::{distinct_function_word_matches, looks_spanish};

use super::pipeline_error::PipelineError;

pub const DEFAULT_EXCERPT_CHARS: usize = 2000;

/// Decides whether text is Spanish before any summarization budget is spent.
///
/// With a classifier configured, the classifier's verdict is authoritative and
/// the word-list heuristic is only logged as a secondary signal. If the
/// classifier errors or times out, the heuristic decides instead and no `Err`
/// is surfaced.
pub struct LanguageGate {
    classifier: Option<Arc<dyn LanguageClassifier>>,
    excerpt_chars: usize,
    timeout: Duration,
}

impl LanguageGate {
    pub fn new(
        classifier: Option<Arc<dyn LanguageClassifier>>,
        excerpt_chars: usize,
        timeout: Duration,
    ) -> Self {
        Self {
            classifier,
            excerpt_chars: excerpt_chars.max(1),
            timeout,
        }
    }

    pub fn heuristic() -> Self {
        Self::new(None, DEFAULT_EXCERPT_CHARS, Duration::from_secs(30))
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn is_spanish(&self, text: &str) -> Result<bool, PipelineError> {
        let excerpt = excerpt(text, self.excerpt_chars);
        let heuristic_verdict = looks_spanish(excerpt);

        let Some(classifier) = &self.classifier else {
            tracing::debug!(
                matches = distinct_function_word_matches(excerpt),
                verdict = heuristic_verdict,
                "Language decided by word-list heuristic"
            );
            return Ok(heuristic_verdict);
        };

        let verdict = match tokio::time::timeout(self.timeout, classifier.is_spanish(excerpt)).await {
            Ok(Ok(verdict)) => {
                if verdict != heuristic_verdict {
                    tracing::info!(
                        classifier = verdict,
                        heuristic = heuristic_verdict,
                        "Language classifier and heuristic disagree"
                    );
                }
                verdict
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Language classifier failed, using heuristic");
                heuristic_verdict
            }
            Err(_) => {
                tracing::warn!("Language classifier timed out, using heuristic");
                heuristic_verdict
            }
        };
        Ok(verdict)
    }
}

/// Leading `max_chars` characters of `text`, cut on a char boundary.
fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
