use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::application::ports::{LlmClient, ResponseSchema, json_payload};
use crate::domain::{SummaryMethod, SummaryResult};

use super::pipeline_error::PipelineError;
use super::summary_request_builder::GenerationInstructions;

/// Loose mirror of the model output; every field is checked by hand so that a
/// wrong type or missing field is reported the same way.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSummary {
    summary_title: Option<serde_json::Value>,
    summary_text: Option<serde_json::Value>,
    summary_method: Option<serde_json::Value>,
}

pub fn summary_response_schema() -> ResponseSchema {
    ResponseSchema {
        name: "document_summary",
        schema: serde_json::json!({
            "type": "object",
            "properties": {
                "summaryTitle": { "type": "string", "description": "A suggested title for the summary." },
                "summaryText": { "type": "string", "description": "The generated summary of the document." },
                "summaryMethod": {
                    "type": "string",
                    "enum": ["extractive", "abstractive", "mixed"],
                    "description": "The summarization technique that dominated."
                }
            },
            "required": ["summaryTitle", "summaryText", "summaryMethod"],
            "additionalProperties": false
        }),
    }
}

/// Single-shot summary generation. Failures are reported once, never retried.
pub struct SummaryGenerator<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    timeout: Duration,
    schema: ResponseSchema,
}

impl<L> SummaryGenerator<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, timeout: Duration) -> Self {
        Self {
            llm_client,
            timeout,
            schema: summary_response_schema(),
        }
    }

    #[tracing::instrument(skip(self, instructions), fields(summary_type = %instructions.summary_type))]
    pub async fn generate(
        &self,
        instructions: &GenerationInstructions,
    ) -> Result<SummaryResult, PipelineError> {
        let raw = tokio::time::timeout(
            self.timeout,
            self.llm_client.complete(
                &instructions.system_prompt,
                &instructions.user_prompt,
                &self.schema,
            ),
        )
        .await
        .map_err(|_| {
            tracing::error!(timeout_secs = self.timeout.as_secs(), "Summary generation timed out");
            PipelineError::GenerationFailure
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "Summary generation request failed");
            PipelineError::GenerationFailure
        })?;

        let summary = parse_summary(&raw).map_err(|reason| {
            tracing::error!(reason, output_chars = raw.len(), "Model output failed validation");
            PipelineError::GenerationFailure
        })?;

        tracing::info!(
            method = summary.summary_method.as_str(),
            summary_chars = summary.summary_text.chars().count(),
            "Summary generated"
        );

        Ok(summary)
    }
}

fn parse_summary(raw: &str) -> Result<SummaryResult, &'static str> {
    let payload = json_payload(raw).ok_or("no JSON object in output")?;
    let parsed: RawSummary = serde_json::from_str(payload).map_err(|_| "output is not valid JSON")?;

    let summary_title = non_empty_string(parsed.summary_title).ok_or("summaryTitle missing or empty")?;
    let summary_text = non_empty_string(parsed.summary_text).ok_or("summaryText missing or empty")?;
    let summary_method = parsed
        .summary_method
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(SummaryMethod::parse_loose)
        .ok_or("summaryMethod missing or not one of extractive/abstractive/mixed")?;

    Ok(SummaryResult {
        summary_title,
        summary_text,
        summary_method,
    })
}

fn non_empty_string(value: Option<serde_json::Value>) -> Option<String> {
    match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}
