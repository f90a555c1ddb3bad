use crate::application::ports::LlmClient;
use crate::domain::{
    DocumentAnalysis, ExtractedText, SummaryRequest, SummaryResult, SummaryType, UploadSource,
    analyze_document,
};

use super::language_gate::LanguageGate;
use super::pipeline_error::PipelineError;
use super::summary_generator::SummaryGenerator;
use super::summary_request_builder::SummaryRequestBuilder;
use super::text_extractor::TextExtractor;
use super::upload_decoder::decode_upload;

/// Upload → decode → extract → length check → language gate → build → generate.
/// The first failing stage short-circuits the rest.
pub struct SummarizationService<L>
where
    L: LlmClient,
{
    extractor: TextExtractor,
    language_gate: LanguageGate,
    request_builder: SummaryRequestBuilder,
    generator: SummaryGenerator<L>,
}

impl<L> SummarizationService<L>
where
    L: LlmClient,
{
    pub fn new(
        extractor: TextExtractor,
        language_gate: LanguageGate,
        request_builder: SummaryRequestBuilder,
        generator: SummaryGenerator<L>,
    ) -> Self {
        Self {
            extractor,
            language_gate,
            request_builder,
            generator,
        }
    }

    pub async fn extract_upload(&self, source: UploadSource) -> Result<ExtractedText, PipelineError> {
        let upload = decode_upload(source, self.extractor.policy()).await?;
        self.extractor
            .extract(&upload.bytes, upload.mime_type_guess.as_deref())
            .await
    }

    #[tracing::instrument(skip(self, source, custom_length))]
    pub async fn summarize_upload(
        &self,
        source: UploadSource,
        summary_type: SummaryType,
        custom_length: Option<String>,
    ) -> Result<SummaryResult, PipelineError> {
        let extracted = self.extract_upload(source).await?;
        self.summarize_text(&SummaryRequest {
            document_text: extracted.text,
            summary_type,
            custom_length,
        })
        .await
    }

    #[tracing::instrument(skip(self, request), fields(summary_type = %request.summary_type))]
    pub async fn summarize_text(
        &self,
        request: &SummaryRequest,
    ) -> Result<SummaryResult, PipelineError> {
        let text = request.document_text.trim();
        self.request_builder.validate_length(text)?;
        self.request_builder
            .validate_custom_length(request.summary_type, request.custom_length.as_deref())?;

        let analysis = analyze_document(text);
        tracing::debug!(
            word_count = analysis.word_count,
            complexity = ?analysis.complexity,
            heuristic_language = ?analysis.language,
            "Document analysed"
        );

        if !self.language_gate.is_spanish(text).await? {
            tracing::info!("Request rejected: text is not Spanish");
            return Err(PipelineError::LanguageMismatch);
        }

        let instructions = self.request_builder.build(
            text,
            request.summary_type,
            request.custom_length.as_deref(),
        )?;

        self.generator.generate(&instructions).await
    }

    pub fn analyze(&self, text: &str) -> DocumentAnalysis {
        analyze_document(text)
    }
}
