//! Paragraph text from Office Open XML word-processing documents.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::errors::AppError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts the document text: one line per body paragraph.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let paragraphs = read_paragraphs(bytes)?;
    Ok(super::join_paragraphs(&paragraphs))
}

/// Returns the text of every body paragraph in document order.
///
/// Empty paragraphs are kept as empty strings. Paragraphs inside tables and
/// text boxes are not body paragraphs and are left out.
pub fn read_paragraphs(bytes: &[u8]) -> Result<Vec<String>, AppError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| AppError::Extraction(format!("missing {DOCUMENT_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| AppError::Extraction(format!("failed to read {DOCUMENT_PART}: {e}")))?;

    parse_document_xml(&xml)
}

/// Walks `word/document.xml` and collects paragraph text.
pub fn parse_document_xml(xml: &str) -> Result<Vec<String>, AppError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    // Depth inside w:tbl / w:txbxContent; their paragraphs are skipped.
    let mut nested = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" => nested += 1,
                b"w:p" if nested == 0 && current.is_none() => current = Some(String::new()),
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = true,
                b"w:tab" if run_depth > 0 => push_char(&mut current, nested, '\t'),
                b"w:br" | b"w:cr" if run_depth > 0 => push_char(&mut current, nested, '\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if nested == 0 && current.is_none() => paragraphs.push(String::new()),
                b"w:tab" if run_depth > 0 => push_char(&mut current, nested, '\t'),
                b"w:br" | b"w:cr" if run_depth > 0 => push_char(&mut current, nested, '\n'),
                _ => {}
            },
            Event::Text(e) if in_text && nested == 0 => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&e.unescape()?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" => nested = nested.saturating_sub(1),
                b"w:p" if nested == 0 => {
                    if let Some(paragraph) = current.take() {
                        paragraphs.push(paragraph);
                    }
                }
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn push_char(current: &mut Option<String>, nested: usize, ch: char) {
    if nested == 0
        && let Some(paragraph) = current.as_mut()
    {
        paragraph.push(ch);
    }
}
