//! Plain-text extraction for uploaded documents.
//!
//! Each format reads into ordered segments (paragraphs or pages) which are
//! then joined with `\n`. The joining rules live here so they can be checked
//! without binary fixtures.

pub mod docx;
pub mod pdf;

use tracing::info;

use crate::core::models::{DocumentKind, UploadedFile};
use crate::errors::AppError;

/// Extracts the text of `file` as a document of the given kind.
pub fn extract(file: &UploadedFile, kind: DocumentKind) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::Docx => docx::extract_text(&file.bytes)?,
        DocumentKind::Pdf => pdf::extract_text(&file.bytes)?,
    };

    info!(
        filename = %file.filename,
        kind = kind.extension(),
        chars = text.chars().count(),
        "Extracted document text"
    );
    Ok(text)
}

/// Runs [`extract`] on the blocking pool so parsing does not stall the
/// request executor.
pub async fn extract_blocking(file: UploadedFile, kind: DocumentKind) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract(&file, kind))
        .await
        .map_err(|e| AppError::Extraction(format!("extraction task failed: {e}")))?
}

/// Joins paragraphs with `\n`, keeping empty paragraphs as empty lines.
#[must_use]
pub fn join_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> String {
    paragraphs
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Joins page texts with `\n`. Pages without text contribute nothing, not
/// even an empty line.
#[must_use]
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    pages
        .into_iter()
        .flatten()
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
