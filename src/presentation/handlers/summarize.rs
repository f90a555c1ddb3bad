use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::application::services::PipelineError;
use crate::domain::{SummaryType, UploadSource, UploadedDocument};
use crate::presentation::state::AppState;

use super::error_response::{pipeline_error_response, rejected_body_error};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary_title: String,
    pub summary_text: String,
}

#[derive(Default)]
struct SummarizeForm {
    upload: Option<UploadedDocument>,
    summary_type: Option<String>,
    custom_length: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn summarize_handler<L>(
    State(state): State<AppState<L>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    L: LlmClient + 'static,
{
    let max_upload_mb = state.settings.limits.max_upload_mb;
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            return pipeline_error_response(&rejected_body_error(
                rejection.status(),
                &rejection.body_text(),
                max_upload_mb,
            ));
        }
    };

    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            return pipeline_error_response(&rejected_body_error(
                e.status(),
                &e.body_text(),
                max_upload_mb,
            ));
        }
    };

    let Some(upload) = form.upload else {
        tracing::warn!("Summarize request with no file");
        return pipeline_error_response(&PipelineError::invalid_input(PipelineError::NO_FILE));
    };

    let summary_type = match form.summary_type.as_deref().map(str::parse::<SummaryType>) {
        None => SummaryType::default(),
        Some(Ok(summary_type)) => summary_type,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Invalid summary type");
            return pipeline_error_response(&PipelineError::invalid_input(
                PipelineError::INVALID_SUMMARY_TYPE,
            ));
        }
    };

    tracing::debug!(
        filename = ?upload.filename,
        declared_mime_type = ?upload.declared_mime_type,
        size_bytes = upload.size_bytes,
        %summary_type,
        "Processing file upload"
    );

    match state
        .summarization_service
        .summarize_upload(UploadSource::RawBytes(upload), summary_type, form.custom_length)
        .await
    {
        Ok(summary) => (
            StatusCode::OK,
            Json(SummarizeResponse {
                summary_title: summary.summary_title,
                summary_text: summary.summary_text,
            }),
        )
            .into_response(),
        Err(e) => pipeline_error_response(&e),
    }
}

async fn read_form(mut multipart: Multipart) -> Result<SummarizeForm, MultipartError> {
    let mut form = SummarizeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                form.upload = Some(UploadedDocument::new(data.to_vec(), content_type, filename));
            }
            Some("summaryType") => form.summary_type = Some(field.text().await?),
            Some("customLength") => form.custom_length = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(form)
}
