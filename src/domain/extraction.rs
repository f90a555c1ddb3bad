use serde::Serialize;

/// Text pulled out of a document. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: Option<usize>,
}

/// Wire shape of an extraction: exactly one of `text` or `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
}

impl ExtractionResult {
    pub fn success(extracted: ExtractedText) -> Self {
        Self {
            text: Some(extracted.text),
            error: None,
            page_count: extracted.page_count,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            text: None,
            error: Some(message.into()),
            page_count: None,
        }
    }
}
