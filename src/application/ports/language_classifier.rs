use async_trait::async_trait;

#[async_trait]
pub trait LanguageClassifier: Send + Sync {
    async fn is_spanish(&self, text: &str) -> Result<bool, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classification request failed: {0}")]
    RequestFailed(String),
    #[error("invalid classification output: {0}")]
    InvalidOutput(String),
}
