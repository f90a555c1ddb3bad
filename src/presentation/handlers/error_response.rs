use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn status_for(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::LanguageMismatch => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::GenerationFailure => StatusCode::BAD_GATEWAY,
        PipelineError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// Translates an extractor rejection (body limit, bad JSON, bad multipart)
/// into the pipeline's own errors so callers still get `{ error }`.
pub fn rejected_body_error(status: StatusCode, detail: &str, max_upload_mb: u64) -> PipelineError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(max_mb = max_upload_mb, "Request body over the upload limit");
        PipelineError::SizeLimitExceeded {
            max_mb: max_upload_mb,
        }
    } else {
        tracing::warn!(status = status.as_u16(), detail, "Request body rejected");
        PipelineError::invalid_input(PipelineError::MALFORMED_UPLOAD)
    }
}

/// Maps a pipeline failure to `{ error }` with a localized message only.
pub fn pipeline_error_response(error: &PipelineError) -> Response {
    let status = status_for(error);
    if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "Request failed");
    } else {
        tracing::warn!(error = %error, status = status.as_u16(), "Request rejected");
    }

    (
        status,
        Json(ErrorResponse {
            error: error.user_message(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_body_reports_configured_upload_limit() {
        assert_eq!(
            rejected_body_error(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded", 5),
            PipelineError::SizeLimitExceeded { max_mb: 5 }
        );
    }

    #[test]
    fn other_rejections_are_malformed_uploads() {
        assert_eq!(
            rejected_body_error(StatusCode::UNSUPPORTED_MEDIA_TYPE, "missing content type", 5),
            PipelineError::invalid_input(PipelineError::MALFORMED_UPLOAD)
        );
    }
}
