//! Browser-facing HTTP surface.

pub mod handler;
pub mod views;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::core::config::AppConfig;
use crate::core::models::SummaryParams;
use crate::session::SessionStore;
use crate::summarize::LazySummarizer;

/// State shared by every route.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub summarizer: Arc<LazySummarizer>,
    pub params: SummaryParams,
}

impl AppState {
    #[must_use]
    pub fn new(summarizer: LazySummarizer) -> Self {
        Self::with_sessions(summarizer, SessionStore::new())
    }

    #[must_use]
    pub fn with_sessions(summarizer: LazySummarizer, sessions: SessionStore) -> Self {
        Self {
            sessions,
            summarizer: Arc::new(summarizer),
            params: SummaryParams::default(),
        }
    }

    /// State whose summarizer talks to the endpoint named in `config`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let idle_secs = u32::try_from(config.session_idle_secs).unwrap_or(u32::MAX);
        Self::with_sessions(
            LazySummarizer::from_config(config),
            SessionStore::with_idle_timeout(chrono::Duration::seconds(i64::from(idle_secs))),
        )
    }
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .route("/summarize", post(handler::summarize))
        .route("/download", get(handler::download))
        .route("/health", get(handler::health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Binds `config.bind_addr` and serves until the process exits.
#[instrument(skip_all, fields(addr = %config.bind_addr))]
pub async fn serve(config: &AppConfig) -> Result<()> {
    let app = router(AppState::from_config(config), config.max_upload_bytes);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("FileGen2 listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
