//! Per-visitor state: the selected file name, the current phase, and the
//! single last-summary slot used by the download action.
//!
//! Uploaded bytes are never stored here; they live only for the request that
//! carried them.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::core::config::DEFAULT_SESSION_IDLE_SECS;
use crate::core::models::UploadedFile;
use crate::errors::AppError;

/// File name offered for the summary download.
pub const DOWNLOAD_FILENAME: &str = "Summary.txt";
pub const DOWNLOAD_MIME: &str = "text/plain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileSelected,
    Summarizing,
    SummaryReady,
    /// The last attempt failed; the selected file is kept.
    Error(String),
}

/// The summary as a downloadable attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDownload {
    pub filename: &'static str,
    pub mime: &'static str,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    phase: Phase,
    selected: Option<String>,
    summary: Option<String>,
    last_seen: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            phase: Phase::Idle,
            selected: None,
            summary: None,
            last_seen: Utc::now(),
        }
    }

    #[must_use]
    pub fn last_seen(&self) -> DateTime<Utc> {
        self.last_seen
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_seen = now;
    }

    /// Idle with nothing selected or stored: indistinguishable from a
    /// session that was never created.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.phase == Phase::Idle && self.selected.is_none() && self.summary.is_none()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn select_file(&mut self, file: &UploadedFile) {
        self.selected = Some(file.filename.clone());
        self.phase = Phase::FileSelected;
    }

    /// Enters `Summarizing`. Requires a selected file.
    pub fn begin_summarizing(&mut self) -> Result<(), AppError> {
        if self.selected.is_none() {
            return Err(AppError::NoFileSelected);
        }
        self.phase = Phase::Summarizing;
        Ok(())
    }

    /// Stores a new summary, replacing any previous one.
    pub fn complete(&mut self, summary: String) {
        self.summary = Some(summary);
        self.phase = Phase::SummaryReady;
    }

    /// Records a failed attempt. The summary slot keeps its last value.
    pub fn fail(&mut self, message: String) {
        self.phase = Phase::Error(message);
    }

    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, Phase::Error(_)) {
            self.phase = if self.selected.is_some() {
                Phase::FileSelected
            } else {
                Phase::Idle
            };
        }
    }

    /// The stored summary as `Summary.txt`. Does not change state.
    #[must_use]
    pub fn download(&self) -> Option<SummaryDownload> {
        self.summary.as_ref().map(|content| SummaryDownload {
            filename: DOWNLOAD_FILENAME,
            mime: DOWNLOAD_MIME,
            content: content.clone(),
        })
    }
}

/// In-memory sessions keyed by the id carried in the visitor's cookie.
///
/// Only sessions holding something are kept, and each lives until it has been
/// idle for longer than the store's timeout.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, Session>>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(Duration::seconds(DEFAULT_SESSION_IDLE_SECS as i64))
    }
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Returns a copy of the session for `id`. An unknown id gets a fresh
    /// session under that id; a missing one gets a new id.
    pub async fn load(&self, id: Option<Uuid>) -> Session {
        let sessions = self.inner.lock().await;
        id.and_then(|id| sessions.get(&id).cloned())
            .unwrap_or_else(|| Session::new(id.unwrap_or_else(Uuid::new_v4)))
    }

    /// Stores `session` as seen now and drops sessions that went idle.
    /// A blank session is not stored.
    pub async fn save(&self, mut session: Session) {
        let now = Utc::now();
        session.touch(now);

        let mut sessions = self.inner.lock().await;
        if session.is_blank() {
            sessions.remove(&session.id);
        } else {
            sessions.insert(session.id, session);
        }
        Self::evict_idle_locked(&mut sessions, now, self.idle_timeout);
    }

    /// Drops every session last seen more than the idle timeout before `now`.
    /// Returns how many were removed.
    pub async fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.inner.lock().await;
        Self::evict_idle_locked(&mut sessions, now, self.idle_timeout)
    }

    fn evict_idle_locked(
        sessions: &mut HashMap<Uuid, Session>,
        now: DateTime<Utc>,
        idle_timeout: Duration,
    ) -> usize {
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_seen <= idle_timeout);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }
        evicted
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
