use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::application::services::PipelineError;
use crate::domain::{SummaryRequest, SummaryResult, SummaryType, UploadSource};
use crate::infrastructure::observability::sanitize_excerpt;
use crate::presentation::state::AppState;

use super::error_response::{pipeline_error_response, rejected_body_error};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    pub file_as_data_url: Option<String>,
    pub document_text: Option<String>,
    pub summary_type: Option<String>,
    pub custom_length: Option<String>,
}

#[derive(Serialize)]
pub struct ProcessResponse {
    pub summary: SummaryResult,
}

enum ProcessSource {
    File(String),
    Text(String),
}

impl ProcessRequest {
    fn source(&self) -> Result<ProcessSource, PipelineError> {
        let file = non_blank(self.file_as_data_url.as_deref());
        let text = non_blank(self.document_text.as_deref());

        match (file, text) {
            (Some(data_url), None) => Ok(ProcessSource::File(data_url.to_string())),
            (None, Some(text)) => Ok(ProcessSource::Text(text.to_string())),
            _ => Err(PipelineError::invalid_input(
                PipelineError::ONE_SOURCE_REQUIRED,
            )),
        }
    }

    fn summary_type(&self) -> Result<SummaryType, PipelineError> {
        match self.summary_type.as_deref() {
            None => Ok(SummaryType::default()),
            Some(raw) => raw.parse().map_err(|e: String| {
                tracing::warn!(error = %e, "Invalid summary type");
                PipelineError::invalid_input(PipelineError::INVALID_SUMMARY_TYPE)
            }),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[tracing::instrument(skip(state, request))]
pub async fn process_handler<L>(
    State(state): State<AppState<L>>,
    request: Result<Json<ProcessRequest>, JsonRejection>,
) -> Response
where
    L: LlmClient + 'static,
{
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return pipeline_error_response(&rejected_body_error(
                rejection.status(),
                &rejection.body_text(),
                state.settings.limits.max_upload_mb,
            ));
        }
    };

    let source = match request.source() {
        Ok(source) => source,
        Err(e) => return pipeline_error_response(&e),
    };
    let summary_type = match request.summary_type() {
        Ok(summary_type) => summary_type,
        Err(e) => return pipeline_error_response(&e),
    };

    let service = &state.summarization_service;
    let result = match source {
        ProcessSource::File(data_url) => {
            tracing::debug!(data_url_chars = data_url.len(), %summary_type, "Processing data URL");
            service
                .summarize_upload(
                    UploadSource::DataUrl(data_url),
                    summary_type,
                    request.custom_length,
                )
                .await
        }
        ProcessSource::Text(document_text) => {
            tracing::debug!(
                text = %sanitize_excerpt(&document_text),
                %summary_type,
                "Processing pasted text"
            );
            service
                .summarize_text(&SummaryRequest {
                    document_text,
                    summary_type,
                    custom_length: request.custom_length,
                })
                .await
        }
    };

    match result {
        Ok(summary) => {
            tracing::info!(method = summary.summary_method.as_str(), "Summary generated");
            (StatusCode::OK, Json(ProcessResponse { summary })).into_response()
        }
        Err(e) => pipeline_error_response(&e),
    }
}
