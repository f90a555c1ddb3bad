use std::io::Write;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{DocumentParser, ParsedDocument, ParserError};

use super::text_sanitizer::sanitize_extracted_text;

/// PDF text via `pdf_oxide`. The document's full page count is reported even
/// when some pages carry no text, so that page ceilings see the real size.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &std::path::Path) -> Result<ParsedDocument, ParserError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ParserError::Malformed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| ParserError::Malformed(format!("failed to read page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            let raw = match doc.extract_text(page_index) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(page = page_index + 1, error = %e, "Skipping unreadable PDF page");
                    continue;
                }
            };
            let text = sanitize_extracted_text(&raw);
            if !text.is_empty() {
                pages.push(text);
            }
        }

        Ok(ParsedDocument {
            text: pages.join("\n\n"),
            page_count: Some(page_count),
        })
    }
}

#[async_trait]
impl DocumentParser for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(size_bytes = data.len()))]
    async fn parse(&self, data: &[u8]) -> Result<ParsedDocument, ParserError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            ParserError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            ParserError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        // The temp file must outlive the blocking task, so it moves in with it.
        let parsed = tokio::task::spawn_blocking(move || {
            let result = Self::extract_pages(temp_file.path());
            drop(temp_file);
            result
        })
        .await
        .map_err(|e| ParserError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = ?parsed.page_count, "PDF text extraction complete");

        Ok(parsed)
    }
}
