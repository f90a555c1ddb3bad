pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const PDF_SIGNATURE: &[u8] = b"%PDF";
const ZIP_SIGNATURE: &[u8] = b"PK\x03\x04";

/// A file as received from the caller, before any decoding or sniffing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub filename: Option<String>,
    pub declared_mime_type: Option<String>,
    pub raw_bytes: Vec<u8>,
    pub size_bytes: u64,
}

impl UploadedDocument {
    pub fn new(
        raw_bytes: Vec<u8>,
        declared_mime_type: Option<String>,
        filename: Option<String>,
    ) -> Self {
        let size_bytes = raw_bytes.len() as u64;
        Self {
            filename,
            declared_mime_type,
            raw_bytes,
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unknown,
}

impl DocumentKind {
    /// Classifies a lowercase MIME hint by substring, the way browsers and
    /// multipart clients label uploads inconsistently.
    pub fn from_mime(mime: &str) -> Self {
        if mime.contains("pdf") {
            Self::Pdf
        } else if mime.contains("officedocument")
            || mime.contains("wordprocessingml")
            || mime.contains("docx")
        {
            Self::Docx
        } else {
            Self::Unknown
        }
    }
}

pub fn has_pdf_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_SIGNATURE)
}

pub fn has_zip_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_SIGNATURE)
}

/// Best-effort MIME guess from content alone.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if has_pdf_signature(bytes) {
        Some(PDF_MIME)
    } else if has_zip_signature(bytes) {
        Some("application/zip")
    } else {
        None
    }
}
