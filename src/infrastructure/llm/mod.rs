mod llm_language_classifier;
mod openai_client;

pub use llm_language_classifier::LlmLanguageClassifier;
pub use openai_client::OpenAiClient;
