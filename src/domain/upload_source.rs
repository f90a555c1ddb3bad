use std::path::PathBuf;

use base64::{Engine as _, engine::general_purpose};

use super::document::{UploadedDocument, sniff_mime};

/// Every shape an upload can arrive in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    RawBytes(UploadedDocument),
    DataUrl(String),
    FileHandle {
        path: PathBuf,
        declared_mime_type: Option<String>,
    },
}

/// Canonical form every pipeline stage works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedUpload {
    pub bytes: Vec<u8>,
    pub mime_type_guess: Option<String>,
}

impl DecodedUpload {
    /// A declared type wins when present; otherwise the content is sniffed.
    pub fn from_bytes(bytes: Vec<u8>, declared_mime_type: Option<&str>) -> Self {
        let mime_type_guess = normalize_mime(declared_mime_type)
            .or_else(|| sniff_mime(&bytes).map(str::to_string));
        Self {
            bytes,
            mime_type_guess,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DataUrlError {
    #[error("missing data: scheme")]
    MissingScheme,
    #[error("missing comma separator")]
    MissingSeparator,
    #[error("payload is not marked as base64")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    InvalidPayload(String),
}

pub fn normalize_mime(mime: Option<&str>) -> Option<String> {
    mime.map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_ascii_lowercase)
}

/// Decodes `data:<mime>[;param=value...];base64,<payload>`.
pub fn parse_data_url(input: &str) -> Result<DecodedUpload, DataUrlError> {
    let input = input.trim();
    let rest = match input.get(..5) {
        Some(scheme) if scheme.eq_ignore_ascii_case("data:") => &input[5..],
        _ => return Err(DataUrlError::MissingScheme),
    };

    let (meta, payload) = rest
        .split_once(',')
        .ok_or(DataUrlError::MissingSeparator)?;

    let mut parts = meta.split(';');
    let mime = parts.next();
    if !parts.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
        return Err(DataUrlError::NotBase64);
    }

    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| DataUrlError::InvalidPayload(e.to_string()))?;

    Ok(DecodedUpload::from_bytes(bytes, mime))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_declared_type_falls_back_to_sniffing() {
        let decoded = DecodedUpload::from_bytes(b"%PDF-1.4".to_vec(), Some("  "));
        assert_eq!(decoded.mime_type_guess.as_deref(), Some("application/pdf"));
    }

    #[test]
    fn declared_type_is_lowercased() {
        let decoded = DecodedUpload::from_bytes(vec![1, 2, 3], Some(" Application/PDF "));
        assert_eq!(decoded.mime_type_guess.as_deref(), Some("application/pdf"));
    }
}
