mod analyze;
mod error_response;
mod extract;
mod health;
mod process;
mod summarize;

pub use analyze::{AnalyzeRequest, analyze_handler};
pub use error_response::{
    ErrorResponse, pipeline_error_response, rejected_body_error, status_for,
};
pub use extract::{ExtractRequest, extract_handler};
pub use health::health_handler;
pub use process::{ProcessRequest, ProcessResponse, process_handler};
pub use summarize::{SummarizeResponse, summarize_handler};
