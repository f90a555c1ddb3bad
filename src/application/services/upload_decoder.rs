use crate::domain::{DecodedUpload, UploadSource, parse_data_url};

use super::pipeline_error::PipelineError;
use super::text_extractor::ExtractionPolicy;

/// Resolves any upload shape into bytes plus a MIME hint. Never panics on
/// caller-provided data.
///
/// File handles are checked against the size ceiling before they are read;
/// in-memory shapes are already buffered and are left to the extractor.
pub async fn decode_upload(
    source: UploadSource,
    policy: &ExtractionPolicy,
) -> Result<DecodedUpload, PipelineError> {
    match source {
        UploadSource::RawBytes(document) => Ok(DecodedUpload::from_bytes(
            document.raw_bytes,
            document.declared_mime_type.as_deref(),
        )),
        UploadSource::DataUrl(data_url) => parse_data_url(&data_url).map_err(|e| {
            tracing::warn!(error = %e, "Rejected malformed data URL");
            PipelineError::invalid_input(PipelineError::MALFORMED_UPLOAD)
        }),
        UploadSource::FileHandle {
            path,
            declared_mime_type,
        } => {
            let unreadable = |e: std::io::Error| {
                tracing::warn!(error = %e, path = %path.display(), "Failed to read upload file");
                PipelineError::invalid_input(PipelineError::MALFORMED_UPLOAD)
            };

            let size_bytes = tokio::fs::metadata(&path).await.map_err(unreadable)?.len();
            if size_bytes > policy.max_bytes() {
                tracing::warn!(
                    size_bytes,
                    max_mb = policy.max_upload_mb,
                    "Upload file rejected before reading: size limit exceeded"
                );
                return Err(PipelineError::SizeLimitExceeded {
                    max_mb: policy.max_upload_mb,
                });
            }

            let bytes = tokio::fs::read(&path).await.map_err(unreadable)?;
            Ok(DecodedUpload::from_bytes(
                bytes,
                declared_mime_type.as_deref(),
            ))
        }
    }
}
