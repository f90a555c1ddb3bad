use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::SummarizationService;
use crate::presentation::config::Settings;

pub struct AppState<L>
where
    L: LlmClient,
{
    pub summarization_service: Arc<SummarizationService<L>>,
    pub settings: Settings,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            summarization_service: Arc::clone(&self.summarization_service),
            settings: self.settings.clone(),
        }
    }
}
