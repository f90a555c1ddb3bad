mod helpers;

use std::sync::Arc;

use sumario::application::services::{
    PipelineError, SummaryGenerator, SummaryRequestBuilder, summary_response_schema,
};
use sumario::domain::{SummaryMethod, SummaryType};

use helpers::*;

async fn generate_with(llm: Arc<StubLlmClient>) -> Result<sumario::domain::SummaryResult, PipelineError> {
    let instructions = SummaryRequestBuilder::default()
        .build(SPANISH_TEXT, SummaryType::Medium, None)
        .unwrap();
    SummaryGenerator::new(llm, SHORT_TIMEOUT)
        .generate(&instructions)
        .await
}

#[tokio::test]
async fn given_valid_model_output_when_generating_then_returns_summary() {
    let summary = generate_with(StubLlmClient::replying(VALID_SUMMARY_JSON))
        .await
        .unwrap();

    assert_eq!(summary.summary_title, "Energía solar");
    assert_eq!(summary.summary_method, SummaryMethod::Mixed);
}

#[tokio::test]
async fn given_prose_wrapped_output_when_generating_then_json_is_located() {
    let reply = format!("Aquí está el resumen:\n```json\n{VALID_SUMMARY_JSON}\n```");

    assert!(generate_with(StubLlmClient::replying(&reply)).await.is_ok());
}

#[tokio::test]
async fn given_non_json_output_when_generating_then_generation_failure() {
    let result = generate_with(StubLlmClient::replying("Lo siento, no puedo ayudar.")).await;

    assert_eq!(result, Err(PipelineError::GenerationFailure));
}

#[tokio::test]
async fn given_output_missing_method_when_generating_then_generation_failure() {
    let reply = r#"{"summaryTitle":"Título","summaryText":"Texto."}"#;

    assert_eq!(
        generate_with(StubLlmClient::replying(reply)).await,
        Err(PipelineError::GenerationFailure)
    );
}

#[tokio::test]
async fn given_blank_summary_text_when_generating_then_generation_failure() {
    let reply = r#"{"summaryTitle":"Título","summaryText":"   ","summaryMethod":"extractive"}"#;

    assert_eq!(
        generate_with(StubLlmClient::replying(reply)).await,
        Err(PipelineError::GenerationFailure)
    );
}

#[tokio::test]
async fn given_failing_client_when_generating_then_called_once_without_retry() {
    let llm = StubLlmClient::failing();

    let result = generate_with(Arc::clone(&llm)).await;

    assert_eq!(result, Err(PipelineError::GenerationFailure));
    assert_eq!(llm.calls(), 1);
}

#[tokio::test]
async fn given_hanging_client_when_generating_then_times_out_as_generation_failure() {
    let result = generate_with(StubLlmClient::hanging()).await;

    assert_eq!(result, Err(PipelineError::GenerationFailure));
}

#[test]
fn given_response_schema_when_inspected_then_requires_all_three_fields() {
    let schema = summary_response_schema();

    let required = schema.schema["required"].as_array().unwrap();
    assert_eq!(required.len(), 3);
    assert_eq!(
        schema.schema["properties"]["summaryMethod"]["enum"],
        serde_json::json!(["extractive", "abstractive", "mixed"])
    );
}
