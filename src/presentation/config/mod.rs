mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ExtractionSettings, LanguageMode, LanguageSettings, LimitsSettings, LlmSettings,
    LoggingSettings, ServerSettings, Settings,
};
