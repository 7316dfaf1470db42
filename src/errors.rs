use thiserror::Error;

/// User-facing text for an upload whose extension is not `docx` or `pdf`.
pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file format. Please upload a DOCX or PDF file.";

/// User-facing text for a document that parsed but held no text.
pub const EMPTY_EXTRACTION_MESSAGE: &str = "No extractable text found in the document.";

/// Coarse classification of [`AppError`], matching what the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedFormat,
    EmptyExtraction,
    Failure,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file extension: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("No extractable text found")]
    EmptyExtraction,

    #[error("No file selected")]
    NoFileSelected,

    #[error("Failed to read upload: {0}")]
    Upload(String),

    #[error("Failed to extract document text: {0}")]
    Extraction(String),

    #[error("Summarization model error: {0}")]
    Inference(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            AppError::EmptyExtraction => ErrorKind::EmptyExtraction,
            _ => ErrorKind::Failure,
        }
    }

    /// The underlying error text, without the variant's prefix.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            AppError::Upload(message)
            | AppError::Extraction(message)
            | AppError::Inference(message)
            | AppError::Http(message)
            | AppError::Config(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Message rendered in the page's error box.
    ///
    /// The two rejection kinds use fixed wording; every failure shows the
    /// raw underlying error text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::UnsupportedFormat => UNSUPPORTED_FORMAT_MESSAGE.to_string(),
            ErrorKind::EmptyExtraction => EMPTY_EXTRACTION_MESSAGE.to_string(),
            ErrorKind::Failure => format!("An error occurred: {}", self.detail()),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Http(error.to_string())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(error: zip::result::ZipError) -> Self {
        AppError::Extraction(format!("invalid DOCX archive: {error}"))
    }
}

impl From<quick_xml::Error> for AppError {
    fn from(error: quick_xml::Error) -> Self {
        AppError::Extraction(format!("invalid DOCX XML: {error}"))
    }
}

impl From<lopdf::Error> for AppError {
    fn from(error: lopdf::Error) -> Self {
        AppError::Extraction(format!("invalid PDF: {error}"))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Inference(error.to_string())
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(error: axum::extract::multipart::MultipartError) -> Self {
        AppError::Upload(error.body_text())
    }
}
