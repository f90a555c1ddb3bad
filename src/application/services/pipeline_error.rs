/// Every way a summarization request can fail. Variants carry no raw
/// collaborator errors; those are logged where they are caught.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unsupported document format")]
    UnsupportedFormat,
    #[error("upload exceeds the {max_mb} MB limit")]
    SizeLimitExceeded { max_mb: u64 },
    #[error("PDF exceeds the {max_pages} page limit")]
    PageLimitExceeded { max_pages: usize },
    #[error("document produced no text")]
    EmptyExtraction,
    #[error("document processing failed")]
    ExtractionFailed,
    #[error("text shorter than {min_chars} characters")]
    TextTooShort { min_chars: usize },
    #[error("text is not Spanish")]
    LanguageMismatch,
    #[error("summary generation failed")]
    GenerationFailure,
    #[error("internal error")]
    Internal,
}

impl PipelineError {
    pub const NO_FILE: &'static str = "No se subió ningún archivo.";
    pub const MALFORMED_UPLOAD: &'static str = "Entrada no válida: el archivo no se pudo decodificar.";
    pub const MISSING_CUSTOM_LENGTH: &'static str =
        "El resumen personalizado requiere indicar una longitud.";
    pub const INVALID_SUMMARY_TYPE: &'static str =
        "Tipo de resumen no válido. Usa detailed, medium, short o custom.";
    pub const ONE_SOURCE_REQUIRED: &'static str =
        "Envía un archivo o un texto, pero no ambos.";

    pub fn invalid_input(message: &str) -> Self {
        Self::InvalidInput(message.to_string())
    }

    /// Short Spanish message safe to show to the end user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(message) => message.clone(),
            Self::UnsupportedFormat => "Tipo de archivo no válido. Sube un PDF o DOCX.".to_string(),
            Self::SizeLimitExceeded { max_mb } => format!(
                "El archivo es demasiado grande. El tamaño máximo es de {max_mb} MB."
            ),
            Self::PageLimitExceeded { max_pages } => format!(
                "El PDF tiene demasiadas páginas. El límite es de {max_pages} páginas."
            ),
            Self::EmptyExtraction => "No se pudo extraer texto del documento. Asegúrate de que el archivo no esté vacío o protegido.".to_string(),
            Self::ExtractionFailed => "Hubo un error al procesar tu archivo. Asegúrate de que sea un PDF o DOCX válido.".to_string(),
            Self::TextTooShort { min_chars } => format!(
                "El texto es demasiado corto. Introduce al menos {min_chars} caracteres."
            ),
            Self::LanguageMismatch => {
                "El texto no está en español. Por favor, proporciona un texto en español."
                    .to_string()
            }
            Self::GenerationFailure => "No se pudo generar el resumen. Por favor, verifica que el texto sea legible y coherente.".to_string(),
            Self::Internal => "Error interno del servidor.".to_string(),
        }
    }
}
