use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::ports::LlmClient;
use crate::presentation::state::AppState;

use super::error_response::{pipeline_error_response, rejected_body_error};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

pub async fn analyze_handler<L>(
    State(state): State<AppState<L>>,
    request: Result<Json<AnalyzeRequest>, JsonRejection>,
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

    let analysis = state.summarization_service.analyze(&request.text);
    tracing::debug!(
        word_count = analysis.word_count,
        complexity = ?analysis.complexity,
        "Document analysed on request"
    );
    Json(analysis).into_response()
}
