//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use filegen::core::models::SummaryParams;
use filegen::errors::AppError;
use filegen::summarize::{LazySummarizer, SummarizationModel};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use zip::write::SimpleFileOptions;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

/// Builds a minimal DOCX whose body holds one paragraph per entry.
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let mut body = String::new();
    for paragraph in paragraphs {
        if paragraph.is_empty() {
            body.push_str("<w:p/>");
        } else {
            body.push_str(&format!(
                r#"<w:p><w:r><w:t xml:space="preserve">{paragraph}</w:t></w:r></w:p>"#
            ));
        }
    }

    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    );

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.start_file("[Content_Types].xml", options).unwrap();
        writer.write_all(CONTENT_TYPES.as_bytes()).unwrap();
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap();
    }
    cursor.into_inner()
}

/// Builds a PDF with one page per entry. `None` pages carry no text at all.
pub fn pdf_bytes(pages: &[Option<&str>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let operations = match page {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![],
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}

/// Like [`pdf_bytes`], but page `broken` (1-based) gets a `/Contents` entry
/// that is an integer instead of a content stream, so reading its text fails.
pub fn pdf_bytes_with_broken_page(pages: &[Option<&str>], broken: u32) -> Vec<u8> {
    let mut doc = Document::load_mem(&pdf_bytes(pages)).unwrap();
    let page_id = doc.get_pages()[&broken];
    doc.get_object_mut(page_id)
        .unwrap()
        .as_dict_mut()
        .unwrap()
        .set("Contents", Object::Integer(7));

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}

/// Model double that records every call and answers with a fixed reply.
pub struct RecordingModel {
    pub reply: String,
    pub calls: Mutex<Vec<(String, SummaryParams)>>,
}

impl RecordingModel {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<(String, SummaryParams)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SummarizationModel for RecordingModel {
    async fn summarize(&self, input: &str, params: &SummaryParams) -> Result<String, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((input.to_string(), *params));
        Ok(self.reply.clone())
    }
}

/// Model double that always fails.
pub struct FailingModel;

#[async_trait]
impl SummarizationModel for FailingModel {
    async fn summarize(&self, _: &str, _: &SummaryParams) -> Result<String, AppError> {
        Err(AppError::Inference("CUDA out of memory".to_string()))
    }
}

/// Lazy holder over `model`, counting how many times it was built.
pub fn lazy_over(model: Arc<dyn SummarizationModel>) -> (LazySummarizer, Arc<AtomicUsize>) {
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = builds.clone();
    let lazy = LazySummarizer::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(model.clone())
    });
    (lazy, builds)
}
