mod language_gate;
mod pipeline_error;
mod summarization_service;
mod summary_generator;
mod summary_request_builder;
mod text_extractor;
mod upload_decoder;

pub use language_gate::{DEFAULT_EXCERPT_CHARS, LanguageGate};
pub use pipeline_error::PipelineError;
pub use summarization_service::SummarizationService;
pub use summary_generator::{SummaryGenerator, summary_response_schema};
pub use summary_request_builder::{
    DEFAULT_MIN_TEXT_CHARS, GenerationInstructions, LONG_SOURCE_WORDS, SUMMARY_WORD_CAP,
    SummaryRequestBuilder,
};
pub use text_extractor::{ExtractionPolicy, TextExtractor};
pub use upload_decoder::decode_upload;
