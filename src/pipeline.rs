//! The summarize action: file name → extractor → summarizer → session slot.

use chrono::Utc;
use tracing::{error, info, instrument};

use crate::core::models::{DocumentKind, SummaryParams, UploadedFile};
use crate::errors::{AppError, ErrorKind};
use crate::extract;
use crate::session::Session;
use crate::summarize::{LazySummarizer, summarize_text};

/// Produces a summary for `file` without touching any session.
///
/// Rejections happen before any expensive work: an unsupported extension
/// never reaches the extractor, and empty text never reaches the model.
pub async fn summarize_file(
    file: UploadedFile,
    summarizer: &LazySummarizer,
    params: &SummaryParams,
) -> Result<String, AppError> {
    let kind = DocumentKind::from_filename(&file.filename)?;
    let text = extract::extract_blocking(file, kind).await?;

    if text.trim().is_empty() {
        return Err(AppError::EmptyExtraction);
    }

    let model = summarizer.get()?;
    summarize_text(model.as_ref(), &text, params).await
}

/// Runs the summarize action for `session` and records the outcome.
///
/// On success the summary replaces the session's slot. On any error the
/// session moves to `Error` with the user-facing message; failures (as
/// opposed to rejections) are also logged.
#[instrument(level = "info", skip_all, fields(session = %session.id, filename = %file.filename))]
pub async fn run_summarize_action(
    session: &mut Session,
    file: UploadedFile,
    summarizer: &LazySummarizer,
    params: &SummaryParams,
) -> Result<String, AppError> {
    session.select_file(&file);
    session.begin_summarizing()?;

    match summarize_file(file, summarizer, params).await {
        Ok(summary) => {
            info!("Summary ready");
            session.complete(summary.clone());
            Ok(summary)
        }
        Err(e) => {
            if e.kind() == ErrorKind::Failure {
                error!(timestamp = %Utc::now().to_rfc3339(), "Error during summarization: {}", e);
            } else {
                info!("Upload rejected: {}", e);
            }
            session.fail(e.user_message());
            Err(e)
        }
    }
}
