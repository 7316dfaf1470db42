//! Route handlers for the page, the summarize action, and the download.

use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{debug, error, info};
use uuid::Uuid;

use super::AppState;
use super::views::{PageView, render_page};
use crate::core::models::UploadedFile;
use crate::errors::AppError;
use crate::pipeline;
use crate::session::Session;

pub const SESSION_COOKIE: &str = "filegen_session";

/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "file";

fn session_id(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

fn with_session_cookie(jar: CookieJar, session: &Session) -> CookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, session.id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// `GET /`
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let mut session = state.sessions.load(session_id(&jar)).await;
    // Reloading the page clears a shown error; the selection stays.
    let html = render_page(&PageView::from_session(&session));
    session.dismiss_error();

    let jar = with_session_cookie(jar, &session);
    state.sessions.save(session).await;
    (jar, Html(html))
}

/// `POST /summarize`
pub async fn summarize(
    State(state): State<AppState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> (CookieJar, Html<String>) {
    let mut session = state.sessions.load(session_id(&jar)).await;

    match read_upload(&mut multipart).await {
        Ok(Some(file)) => {
            info!(filename = %file.filename, bytes = file.bytes.len(), "Received upload");
            let outcome =
                pipeline::run_summarize_action(&mut session, file, &state.summarizer, &state.params)
                    .await;
            // Both outcomes are already recorded on the session.
            match outcome {
                Ok(summary) => debug!(summary_chars = summary.chars().count(), "Rendering summary"),
                Err(e) => debug!(kind = ?e.kind(), "Rendering error message"),
            }
        }
        Ok(None) => session.fail(AppError::NoFileSelected.user_message()),
        Err(e) => {
            error!(error = %e, "Upload could not be read");
            session.fail(e.user_message());
        }
    }

    let html = render_page(&PageView::from_session(&session));
    let jar = with_session_cookie(jar, &session);
    state.sessions.save(session).await;
    (jar, Html(html))
}

/// `GET /download`
pub async fn download(State(state): State<AppState>, jar: CookieJar) -> Response {
    let session = state.sessions.load(session_id(&jar)).await;

    match session.download() {
        Some(file) => (
            [
                (header::CONTENT_TYPE, format!("{}; charset=utf-8", file.mime)),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", file.filename),
                ),
            ],
            file.content,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "No summary available for download").into_response(),
    }
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}

/// Reads the first file from the `file` field. A part with an empty file
/// name is how browsers submit a form with nothing chosen.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Ok(None);
        }

        let bytes = field.bytes().await?;
        return Ok(Some(UploadedFile::new(filename, bytes)));
    }

    Ok(None)
}
