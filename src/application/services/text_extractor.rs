use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{DocumentParser, ParsedDocument, ParserError};
use crate::domain::{DocumentKind, ExtractedText, has_pdf_signature};

use super::pipeline_error::PipelineError;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Ceilings applied to every upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionPolicy {
    pub max_upload_mb: u64,
    pub max_pdf_pages: usize,
    pub parse_timeout: Duration,
}

impl ExtractionPolicy {
    pub fn max_bytes(&self) -> u64 {
        self.max_upload_mb * BYTES_PER_MB
    }
}

impl Default for ExtractionPolicy {
    fn default() -> Self {
        Self {
            max_upload_mb: 5,
            max_pdf_pages: 50,
            parse_timeout: Duration::from_secs(30),
        }
    }
}

/// Which parsers to try, in order, and how to report total failure.
#[derive(Debug, PartialEq, Eq)]
struct DispatchPlan {
    attempts: Vec<DocumentKind>,
    speculative: bool,
}

pub struct TextExtractor {
    parsers: HashMap<DocumentKind, Arc<dyn DocumentParser>>,
    policy: ExtractionPolicy,
}

impl TextExtractor {
    pub fn new(parsers: Vec<(DocumentKind, Arc<dyn DocumentParser>)>, policy: ExtractionPolicy) -> Self {
        Self {
            parsers: parsers.into_iter().collect(),
            policy,
        }
    }

    pub fn policy(&self) -> &ExtractionPolicy {
        &self.policy
    }

    #[tracing::instrument(skip(self, bytes), fields(size_bytes = bytes.len()))]
    pub async fn extract(
        &self,
        bytes: &[u8],
        mime_type_guess: Option<&str>,
    ) -> Result<ExtractedText, PipelineError> {
        if bytes.len() as u64 > self.policy.max_bytes() {
            tracing::warn!(
                max_mb = self.policy.max_upload_mb,
                "Upload rejected before parsing: size limit exceeded"
            );
            return Err(PipelineError::SizeLimitExceeded {
                max_mb: self.policy.max_upload_mb,
            });
        }

        let hint = mime_type_guess
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_ascii_lowercase);
        let plan = dispatch_plan(bytes, hint.as_deref())?;

        for kind in &plan.attempts {
            let Some(parser) = self.parsers.get(kind) else {
                tracing::warn!(?kind, "No parser registered for document kind");
                continue;
            };

            match self.run_parser(parser.as_ref(), bytes).await {
                Ok(parsed) => return self.accept(*kind, parsed),
                Err(e) => {
                    tracing::warn!(?kind, error = %e, "Parser failed, trying next candidate");
                }
            }
        }

        if plan.speculative {
            Err(PipelineError::UnsupportedFormat)
        } else {
            Err(PipelineError::ExtractionFailed)
        }
    }

    async fn run_parser(
        &self,
        parser: &dyn DocumentParser,
        bytes: &[u8],
    ) -> Result<ParsedDocument, ParserError> {
        tokio::time::timeout(self.policy.parse_timeout, parser.parse(bytes))
            .await
            .map_err(|_| ParserError::TimedOut)?
    }

    fn accept(&self, kind: DocumentKind, parsed: ParsedDocument) -> Result<ExtractedText, PipelineError> {
        if kind == DocumentKind::Pdf {
            if let Some(pages) = parsed.page_count {
                if pages > self.policy.max_pdf_pages {
                    tracing::warn!(
                        page_count = pages,
                        max_pages = self.policy.max_pdf_pages,
                        "Parsed PDF discarded: page limit exceeded"
                    );
                    return Err(PipelineError::PageLimitExceeded {
                        max_pages: self.policy.max_pdf_pages,
                    });
                }
            }
        }

        let text = parsed.text.trim();
        if text.is_empty() {
            tracing::warn!(?kind, "Parser returned no text");
            return Err(PipelineError::EmptyExtraction);
        }

        tracing::info!(
            ?kind,
            page_count = ?parsed.page_count,
            chars = text.chars().count(),
            "Text extraction complete"
        );

        Ok(ExtractedText {
            text: text.to_string(),
            page_count: parsed.page_count,
        })
    }
}

/// PDF signature first, then the MIME hint. DOCX is the fallback because a
/// zip container is far less distinctive than `%PDF`.
fn dispatch_plan(bytes: &[u8], hint: Option<&str>) -> Result<DispatchPlan, PipelineError> {
    if has_pdf_signature(bytes) {
        return Ok(DispatchPlan {
            attempts: vec![DocumentKind::Pdf],
            speculative: false,
        });
    }

    match hint {
        None | Some("application/octet-stream") | Some("application/zip") => Ok(DispatchPlan {
            attempts: vec![DocumentKind::Docx],
            speculative: true,
        }),
        Some(mime) => match DocumentKind::from_mime(mime) {
            // Labelled PDF without the signature: likely a mislabelled upload.
            DocumentKind::Pdf => Ok(DispatchPlan {
                attempts: vec![DocumentKind::Pdf, DocumentKind::Docx],
                speculative: false,
            }),
            DocumentKind::Docx => Ok(DispatchPlan {
                attempts: vec![DocumentKind::Docx],
                speculative: false,
            }),
            DocumentKind::Unknown => {
                tracing::warn!(mime, "Unsupported document type");
                Err(PipelineError::UnsupportedFormat)
            }
        },
    }
}
