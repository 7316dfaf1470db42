mod common;

use common::{docx_bytes, pdf_bytes, pdf_bytes_with_broken_page};
use filegen::core::models::{DocumentKind, UploadedFile};
use filegen::errors::AppError;
use filegen::extract::{self, docx, join_pages, join_paragraphs, pdf};

#[test]
fn test_docx_paragraphs_join_with_empty_lines_kept() {
    let bytes = docx_bytes(&["Hello", "", "World"]);
    let file = UploadedFile::new("greeting.docx", bytes);

    let text = extract::extract(&file, DocumentKind::Docx).unwrap();
    assert_eq!(text, "Hello\n\nWorld");
}

#[test]
fn test_docx_segment_count_matches_paragraph_count() {
    let paragraphs = ["one", "two", "", "", "five", "six"];
    let bytes = docx_bytes(&paragraphs);

    let read = docx::read_paragraphs(&bytes).unwrap();
    assert_eq!(read, paragraphs);

    let text = docx::extract_text(&bytes).unwrap();
    assert_eq!(text.split('\n').count(), paragraphs.len());
}

#[test]
fn test_docx_with_only_empty_paragraphs_is_whitespace() {
    let text = docx::extract_text(&docx_bytes(&["", "", ""])).unwrap();
    assert_eq!(text, "\n\n");
    assert!(text.trim().is_empty());
}

#[test]
fn test_docx_missing_document_part_is_an_error() {
    // A valid zip that is not a word document
    let bytes = {
        use std::io::Write;
        let mut cursor = std::io::Cursor::new(Vec::new());
        let mut writer = zip::ZipWriter::new(&mut cursor);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer.start_file("readme.txt", options).unwrap();
        writer.write_all(b"hello").unwrap();
        writer.finish().unwrap();
        cursor.into_inner()
    };

    let err = docx::read_paragraphs(&bytes).unwrap_err();
    match err {
        AppError::Extraction(msg) => assert!(msg.contains("word/document.xml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_pdf_pages_without_text_are_skipped() {
    let bytes = pdf_bytes(&[Some("First page"), None, Some("Third page")]);

    let pages = pdf::read_pages(&bytes).unwrap();
    assert_eq!(pages.len(), 3);
    assert!(pages[1].is_none());

    let file = UploadedFile::new("scan.pdf", bytes);
    let text = extract::extract(&file, DocumentKind::Pdf).unwrap();
    assert_eq!(text, "First page\nThird page");
}

#[test]
fn test_pdf_page_that_fails_to_extract_is_skipped() {
    let bytes = pdf_bytes_with_broken_page(&[Some("Alpha"), Some("Gamma")], 1);

    let pages = pdf::read_pages(&bytes).unwrap();
    assert_eq!(pages, vec![None, Some("Gamma".to_string())]);

    assert_eq!(pdf::extract_text(&bytes).unwrap(), "Gamma");
}

#[test]
fn test_pdf_with_no_text_at_all_is_empty() {
    let text = pdf::extract_text(&pdf_bytes(&[None, None])).unwrap();
    assert!(text.is_empty());
}

#[test]
fn test_pdf_garbage_is_an_extraction_error() {
    let err = pdf::extract_text(b"this is not a pdf").unwrap_err();
    assert!(matches!(err, AppError::Extraction(_)));
}

#[test]
fn test_join_paragraphs_scenario() {
    assert_eq!(join_paragraphs(&["Hello", "", "World"]), "Hello\n\nWorld");
    assert_eq!(join_paragraphs::<&str>(&[]), "");
}

#[test]
fn test_join_pages_keeps_order_and_drops_empty_pages() {
    let pages = vec![
        Some("page one".to_string()),
        None,
        Some("page three".to_string()),
        Some(String::new()),
        Some("page five".to_string()),
    ];
    assert_eq!(join_pages(pages), "page one\npage three\npage five");
}

#[tokio::test]
async fn test_extract_blocking_matches_sync_extract() {
    let file = UploadedFile::new("notes.docx", docx_bytes(&["a", "b"]));
    let text = extract::extract_blocking(file, DocumentKind::Docx)
        .await
        .unwrap();
    assert_eq!(text, "a\nb");
}
