use async_trait::async_trait;

/// JSON schema the model output has to conform to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    pub name: &'static str,
    pub schema: serde_json::Value,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the raw model output, expected to be a JSON document matching `schema`.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("request timed out")]
    Timeout,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Locates the JSON object in model output that may be wrapped in a
/// markdown fence or preceded by prose.
pub fn json_payload(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}
