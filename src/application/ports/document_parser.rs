use async_trait::async_trait;

/// Raw text pulled from a document by a format-specific parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub text: String,
    pub page_count: Option<usize>,
}

#[async_trait]
pub trait DocumentParser: Send + Sync {
    async fn parse(&self, data: &[u8]) -> Result<ParsedDocument, ParserError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("malformed document: {0}")]
    Malformed(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("extraction timed out")]
    TimedOut,
}
