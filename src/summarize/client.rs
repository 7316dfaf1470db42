//! Hugging Face Inference API client
//!
//! Sends text to a hosted summarization model and reads back the abstract.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

use super::SummarizationModel;
use crate::core::config::AppConfig;
use crate::core::models::SummaryParams;
use crate::errors::AppError;

/// Summarization model served by an inference endpoint.
pub struct HubSummarizer {
    http: Client,
    model_url: String,
    api_token: Option<String>,
}

impl HubSummarizer {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        model_url: String,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Http(format!("Failed to build inference HTTP client: {e}")))?;

        Ok(Self {
            http,
            model_url,
            api_token,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Self::new(
            config.model_url(),
            config.hf_api_token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    #[must_use]
    pub fn model_url(&self) -> &str {
        &self.model_url
    }
}

/// Request body for the summarization task.
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: &'a SummaryParams,
    pub options: InferenceOptions,
}

#[derive(Debug, Serialize)]
pub struct InferenceOptions {
    /// Block while a cold model loads instead of failing with 503.
    pub wait_for_model: bool,
}

#[must_use]
pub fn build_request_body<'a>(input: &'a str, params: &'a SummaryParams) -> InferenceRequest<'a> {
    InferenceRequest {
        inputs: input,
        parameters: params,
        options: InferenceOptions {
            wait_for_model: true,
        },
    }
}

/// Pulls the first `summary_text` out of an inference response.
///
/// The endpoint answers with a list of results; a bare object is accepted
/// too. An `error` field is reported as an inference failure.
pub fn parse_summary_response(body: &Value) -> Result<String, AppError> {
    if let Some(message) = body.get("error").and_then(Value::as_str) {
        return Err(AppError::Inference(message.to_string()));
    }

    let first = match body {
        Value::Array(items) => items.first(),
        Value::Object(_) => Some(body),
        _ => None,
    };

    first
        .and_then(|item| item.get("summary_text"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| AppError::Inference("No summary_text in model response".to_string()))
}

#[async_trait]
impl SummarizationModel for HubSummarizer {
    async fn summarize(&self, input: &str, params: &SummaryParams) -> Result<String, AppError> {
        let mut request = self
            .http
            .post(&self.model_url)
            .json(&build_request_body(input, params));

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Http(format!("Inference request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            // The service wraps most failures as {"error": "..."}; surface that text.
            let message = serde_json::from_str::<Value>(&error_text)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or(error_text);
            warn!(%status, "Inference endpoint returned an error");
            return Err(AppError::Inference(format!(
                "Inference API error (status {status}): {message}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Inference(format!("Failed to parse inference response: {e}")))?;

        let summary = parse_summary_response(&body)?;
        info!(summary_chars = summary.chars().count(), "Received summary");
        Ok(summary)
    }
}
