use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::application::ports::{DocumentParser, ParsedDocument, ParserError};

use super::text_sanitizer::sanitize_extracted_text;

const DOCUMENT_PART: &str = "word/document.xml";
/// Guards against zip bombs: a 5 MB upload can inflate far beyond this.
const MAX_DOCUMENT_XML_BYTES: u64 = 64 * 1024 * 1024;

/// Raw text from the main part of an OOXML word-processing document.
/// Formatting is dropped; paragraphs, tabs and breaks become whitespace.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_document_xml(data: &[u8]) -> Result<Vec<u8>, ParserError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))
            .map_err(|e| ParserError::Malformed(format!("not a zip container: {e}")))?;

        let entry = archive
            .by_name(DOCUMENT_PART)
            .map_err(|_| ParserError::Malformed(format!("{DOCUMENT_PART} not found")))?;

        let mut xml = Vec::new();
        entry
            .take(MAX_DOCUMENT_XML_BYTES)
            .read_to_end(&mut xml)
            .map_err(|e| ParserError::ExtractionFailed(format!("failed to inflate {DOCUMENT_PART}: {e}")))?;

        if xml.len() as u64 >= MAX_DOCUMENT_XML_BYTES {
            return Err(ParserError::ExtractionFailed(format!(
                "{DOCUMENT_PART} exceeds size limit"
            )));
        }

        Ok(xml)
    }

    fn collect_text(xml: &[u8]) -> Result<String, ParserError> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();
        let mut out = String::new();
        let mut in_text_run = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    if e.local_name().as_ref() == b"t" {
                        in_text_run = true;
                    }
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"t" => in_text_run = false,
                    b"p" => out.push('\n'),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"tab" => out.push('\t'),
                    b"br" | b"cr" => out.push('\n'),
                    b"p" => out.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(t)) if in_text_run => {
                    let text = t
                        .unescape()
                        .map_err(|e| ParserError::Malformed(format!("bad text run: {e}")))?;
                    out.push_str(&text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ParserError::Malformed(format!(
                        "XML error at position {}: {e}",
                        reader.buffer_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(out)
    }
}

#[async_trait]
impl DocumentParser for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(size_bytes = data.len()))]
    async fn parse(&self, data: &[u8]) -> Result<ParsedDocument, ParserError> {
        let owned = data.to_vec();

        let raw = tokio::task::spawn_blocking(move || {
            let xml = Self::read_document_xml(&owned)?;
            Self::collect_text(&xml)
        })
        .await
        .map_err(|e| ParserError::ExtractionFailed(format!("task join error: {e}")))??;

        let text = sanitize_extracted_text(&raw);
        tracing::info!(chars = text.chars().count(), "DOCX text extraction complete");

        Ok(ParsedDocument {
            text,
            page_count: None,
        })
    }
}
