//! Page text from PDF documents.

use lopdf::Document;
use tracing::debug;

use crate::errors::AppError;

/// Extracts the document text: one segment per page that yields text.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let pages = read_pages(bytes)?;
    Ok(super::join_pages(pages))
}

/// Returns the text of each page in page order, `None` where a page yields
/// nothing.
///
/// Loading the document is the only fallible step; a page that fails to
/// extract (image-only scans, unsupported fonts) is reported as `None`.
pub fn read_pages(bytes: &[u8]) -> Result<Vec<Option<String>>, AppError> {
    let document = Document::load_mem(bytes)?;
    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    debug!(page_count = page_numbers.len(), "Loaded PDF document");

    Ok(page_numbers
        .into_iter()
        .map(|number| page_text(&document, number))
        .collect())
}

fn page_text(document: &Document, page_number: u32) -> Option<String> {
    match document.extract_text(&[page_number]) {
        Ok(text) => {
            let text = text.trim_end_matches(['\r', '\n']);
            if text.is_empty() {
                debug!(page = page_number, "Page yielded no text");
                None
            } else {
                Some(text.to_string())
            }
        }
        Err(e) => {
            debug!(page = page_number, error = %e, "Page text extraction failed");
            None
        }
    }
}
