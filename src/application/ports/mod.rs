mod document_parser;
mod language_classifier;
mod llm_client;

pub use document_parser::{DocumentParser, ParsedDocument, ParserError};
pub use language_classifier::{ClassifierError, LanguageClassifier};
pub use llm_client::{LlmClient, LlmClientError, ResponseSchema, json_payload};
