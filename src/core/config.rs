use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8501";
pub const DEFAULT_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 60 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub hf_api_token: Option<String>,
    pub summarization_model: String,
    pub inference_url: String,
    pub max_upload_bytes: usize,
    pub request_timeout_secs: u64,
    pub session_idle_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8501)),
            hf_api_token: None,
            summarization_model: DEFAULT_MODEL.to_string(),
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_idle_secs: DEFAULT_SESSION_IDLE_SECS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            bind_addr: env::var("FILEGEN_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
                .parse()
                .map_err(|e| format!("FILEGEN_BIND_ADDR: {}", e))?,
            hf_api_token: env::var("HF_API_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            summarization_model: env::var("SUMMARIZATION_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            inference_url: env::var("HF_INFERENCE_URL")
                .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string()),
            max_upload_bytes: parse_or("FILEGEN_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            request_timeout_secs: parse_or("HF_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            session_idle_secs: parse_or("FILEGEN_SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)?,
        })
    }

    /// Full URL of the configured model on the inference endpoint.
    #[must_use]
    pub fn model_url(&self) -> String {
        format!(
            "{}/{}",
            self.inference_url.trim_end_matches('/'),
            self.summarization_model.trim_start_matches('/')
        )
    }
}

fn parse_or<T>(name: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e| format!("{}: {}", name, e)),
        Err(_) => Ok(default),
    }
}
