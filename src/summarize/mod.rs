//! Summarization of extracted text through an external model.

pub mod client;
pub mod handle;

use async_trait::async_trait;
use tracing::info;

use crate::core::models::SummaryParams;
use crate::errors::AppError;

pub use client::HubSummarizer;
pub use handle::LazySummarizer;

/// Number of characters forwarded to the model; the rest is dropped.
pub const MAX_INPUT_CHARS: usize = 1000;

/// An external capability that maps text to a shorter abstract.
#[async_trait]
pub trait SummarizationModel: Send + Sync {
    async fn summarize(&self, input: &str, params: &SummaryParams) -> Result<String, AppError>;
}

/// Returns at most the first [`MAX_INPUT_CHARS`] characters of `text`.
///
/// The cut is by character, not byte, and ignores sentence boundaries.
#[must_use]
pub fn truncate_input(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Summarizes `text` with `model`, truncating the input first.
pub async fn summarize_text(
    model: &dyn SummarizationModel,
    text: &str,
    params: &SummaryParams,
) -> Result<String, AppError> {
    let input = truncate_input(text);

    #[cfg(feature = "debug-logs")]
    info!("Summarization input:\n{}", input);

    #[cfg(not(feature = "debug-logs"))]
    info!(
        input_chars = input.chars().count(),
        max_length = params.max_length,
        min_length = params.min_length,
        "Requesting summary"
    );

    model.summarize(input, params).await
}
