use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, extract_handler, health_handler, process_handler, summarize_handler,
};
use crate::presentation::state::AppState;

/// Headroom over the upload ceiling for multipart framing and base64 inflation.
const BODY_LIMIT_MARGIN_BYTES: usize = 2 * 1024 * 1024;

pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Data URLs carry base64, roughly 4/3 of the raw size.
    let body_limit = state.settings.limits.max_upload_bytes() / 3 * 4 + BODY_LIMIT_MARGIN_BYTES;

    Router::new()
        .route("/health", get(health_handler))
        .route("/summarize", post(summarize_handler::<L>))
        .route("/api/v1/process", post(process_handler::<L>))
        .route("/api/v1/extract", post(extract_handler::<L>))
        .route("/api/v1/analyze", post(analyze_handler::<L>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
