use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::ports::LlmClient;
use crate::application::services::PipelineError;
use crate::domain::{ExtractionResult, UploadSource};
use crate::presentation::state::AppState;

use super::error_response::{rejected_body_error, status_for};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    pub file_as_data_url: String,
}

/// Answers with the `{ text | error }` shape, including for bodies rejected
/// before parsing. Client-side failures are 400.
#[tracing::instrument(skip(state, request))]
pub async fn extract_handler<L>(
    State(state): State<AppState<L>>,
    request: Result<Json<ExtractRequest>, JsonRejection>,
) -> Response
where
    L: LlmClient + 'static,
{
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return failure_response(&rejected_body_error(
                rejection.status(),
                &rejection.body_text(),
                state.settings.limits.max_upload_mb,
            ));
        }
    };

    match state
        .summarization_service
        .extract_upload(UploadSource::DataUrl(request.file_as_data_url))
        .await
    {
        Ok(extracted) => {
            tracing::info!(
                chars = extracted.text.chars().count(),
                page_count = ?extracted.page_count,
                "Text extracted"
            );
            (StatusCode::OK, Json(ExtractionResult::success(extracted))).into_response()
        }
        Err(e) => failure_response(&e),
    }
}

fn failure_response(error: &PipelineError) -> Response {
    let status = if status_for(error).is_server_error() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::BAD_REQUEST
    };
    tracing::warn!(error = %error, "Extraction failed");
    (status, Json(ExtractionResult::failure(error.user_message()))).into_response()
}
