use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{
    ClassifierError, LanguageClassifier, LlmClient, ResponseSchema, json_payload,
};

const SYSTEM_PROMPT: &str = "You are a language identification service. \
     Determine whether the text supplied by the user is written in Spanish. \
     Respond only with a JSON object of the form {\"isSpanish\": true} or {\"isSpanish\": false}.";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Verdict {
    is_spanish: bool,
}

/// Yes/no Spanish classification backed by the same LLM used for summaries.
pub struct LlmLanguageClassifier<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    schema: ResponseSchema,
}

impl<L> LlmLanguageClassifier<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self {
            llm_client,
            schema: ResponseSchema {
                name: "language_verdict",
                schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "isSpanish": { "type": "boolean" }
                    },
                    "required": ["isSpanish"],
                    "additionalProperties": false
                }),
            },
        }
    }
}

#[async_trait]
impl<L> LanguageClassifier for LlmLanguageClassifier<L>
where
    L: LlmClient,
{
    async fn is_spanish(&self, text: &str) -> Result<bool, ClassifierError> {
        let user_prompt = format!("Text: {text}");
        let raw = self
            .llm_client
            .complete(SYSTEM_PROMPT, &user_prompt, &self.schema)
            .await
            .map_err(|e| ClassifierError::RequestFailed(e.to_string()))?;

        let payload = json_payload(&raw)
            .ok_or_else(|| ClassifierError::InvalidOutput("no JSON object".to_string()))?;
        let verdict: Verdict = serde_json::from_str(payload)
            .map_err(|e| ClassifierError::InvalidOutput(e.to_string()))?;

        tracing::debug!(is_spanish = verdict.is_spanish, "Language classified");
        Ok(verdict.is_spanish)
    }
}
