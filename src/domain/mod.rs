mod analysis;
mod document;
mod extraction;
mod language;
mod summary;
mod upload_source;

pub use analysis::{Complexity, DocumentAnalysis, analyze_document};
pub use document::{
    DOCX_MIME, DocumentKind, PDF_MIME, UploadedDocument, has_pdf_signature, has_zip_signature,
    sniff_mime,
};
pub use extraction::{ExtractedText, ExtractionResult};
pub use language::{Language, detect_language, distinct_function_word_matches, looks_spanish};
pub use summary::{SummaryMethod, SummaryRequest, SummaryResult, SummaryType};
pub use upload_source::{
    DataUrlError, DecodedUpload, UploadSource, normalize_mime, parse_data_url,
};
