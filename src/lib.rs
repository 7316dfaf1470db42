/// FileGen2 - a one-page web utility that summarizes uploaded DOCX and PDF files.
///
/// A visitor uploads a document, the service extracts its plain text, keeps the
/// first 1000 characters, and asks a pretrained summarization model for a short
/// abstract. The abstract is shown on the page and can be downloaded as
/// `Summary.txt`.
///
/// # Architecture
///
/// The system uses:
/// - axum for the page, the upload form, and the download route
/// - zip + quick-xml for DOCX paragraphs, lopdf for PDF pages
/// - the Hugging Face Inference API (via reqwest) for summarization
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use filegen::core::models::{SummaryParams, UploadedFile};
/// use filegen::summarize::LazySummarizer;
/// use filegen::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     filegen::setup_logging();
///
///     let config = AppConfig::default();
///     let summarizer = LazySummarizer::from_config(&config);
///
///     let file = UploadedFile::new("report.pdf", std::fs::read("report.pdf")?);
///     let summary =
///         filegen::pipeline::summarize_file(file, &summarizer, &SummaryParams::default())
///             .await?;
///     println!("Summary: {}", summary);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod core;
pub mod errors;
pub mod extract;
pub mod pipeline;
pub mod session;
pub mod summarize;
pub mod web;

/// Configure structured logging with JSON format.
///
/// Log level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; only the first call installs the subscriber.
///
/// # Example
///
/// ```
/// filegen::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
