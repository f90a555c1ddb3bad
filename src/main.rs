use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use sumario::application::ports::{DocumentParser, LanguageClassifier};
use sumario::application::services::{
    LanguageGate, SummarizationService, SummaryGenerator, SummaryRequestBuilder, TextExtractor,
};
use sumario::domain::DocumentKind;
use sumario::infrastructure::llm::{LlmLanguageClassifier, OpenAiClient};
use sumario::infrastructure::observability::{TracingConfig, init_tracing};
use sumario::infrastructure::text_processing::{DocxAdapter, PdfAdapter};
use sumario::presentation::{AppState, Environment, LanguageMode, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::try_from(
        std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
    )
    .map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let llm_client = Arc::new(OpenAiClient::new(&settings.llm));
    if settings.llm.api_key.is_empty() {
        tracing::warn!("APP_LLM__API_KEY is not set; summary generation will fail");
    }
    tracing::info!(model = llm_client.model(), "LLM client configured");

    let parsers: Vec<(DocumentKind, Arc<dyn DocumentParser>)> = vec![
        (DocumentKind::Pdf, Arc::new(PdfAdapter::new()) as Arc<dyn DocumentParser>),
        (DocumentKind::Docx, Arc::new(DocxAdapter::new()) as Arc<dyn DocumentParser>),
    ];
    let extractor = TextExtractor::new(parsers, settings.extraction_policy());

    let classifier: Option<Arc<dyn LanguageClassifier>> = match settings.language.mode {
        LanguageMode::Classifier => Some(
            Arc::new(LlmLanguageClassifier::new(Arc::clone(&llm_client))) as Arc<dyn LanguageClassifier>,
        ),
        LanguageMode::Heuristic => None,
    };
    let language_gate = LanguageGate::new(
        classifier,
        settings.language.excerpt_chars,
        Duration::from_secs(settings.language.timeout_secs),
    );

    let summarization_service = Arc::new(SummarizationService::new(
        extractor,
        language_gate,
        SummaryRequestBuilder::new(settings.limits.min_text_chars),
        SummaryGenerator::new(
            Arc::clone(&llm_client),
            Duration::from_secs(settings.llm.timeout_secs),
        ),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let router = create_router(AppState {
        summarization_service,
        settings,
    });

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
