//! HTML for the single summarizer page.

use crate::core::models::DocumentKind;
use crate::session::{Phase, Session};

pub const PAGE_TITLE: &str = "FileGen2";
pub const HEADING: &str = "File Gen 2";
pub const SUBTITLE: &str = "File Summarizer (DOCX/PDF only)";
pub const PROCESSING_TEXT: &str = "Processing File...";

/// Disables the button and shows the processing note while the request runs.
const ON_SUBMIT: &str = "this.querySelector('button').disabled = true; \
document.getElementById('processing').hidden = false;";

const STYLES: &str = r#"
        body { font-family: "Source Sans Pro", "Helvetica Neue", Arial, sans-serif; margin: 0; color: #31333f; }
        main { max-width: 730px; margin: 0 auto; padding: 3rem 1rem; box-sizing: border-box; }
        label { display: block; margin-bottom: 0.5rem; }
        input[type="file"] { width: 100%; padding: 1rem; margin-bottom: 1rem; border-radius: 8px; background: #f0f2f6; box-sizing: border-box; }
        .button {
            display: block;
            box-sizing: border-box;
            width: 100%;
            padding: 0.5rem;
            font-weight: bold;
            border-radius: 10px;
            border: 1px solid #AB2323;
            background: #ffffff;
            color: red;
            text-align: center;
            text-decoration: none;
            cursor: pointer;
        }
        .button.primary { background: #ff4b4b; border-color: #ff4b4b; color: #ffffff; }
        .summary-box {
            border: 1px solid rgb(166, 80, 126);
            padding: 1rem;
            border-radius: 8px;
            border-color: #A6507E;
            margin-bottom: 1rem;
            line-height: 1.5;
            white-space: pre-wrap;
        }
        .note { color: #555867; }
        .processing { font-style: italic; color: #555867; }
        .error-box {
            background-color: #ffcccb;
            padding: 1rem;
            border-radius: 5px;
            color: #a00;
            margin: 1rem 0;
        }
"#;

/// What the page shows for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView<'a> {
    pub selected_file: Option<&'a str>,
    pub error: Option<&'a str>,
    /// Present only right after a successful run.
    pub summary: Option<&'a str>,
}

impl<'a> PageView<'a> {
    #[must_use]
    pub fn from_session(session: &'a Session) -> Self {
        let summary = match session.phase() {
            Phase::SummaryReady => session.summary(),
            _ => None,
        };

        Self {
            selected_file: session.selected_file(),
            error: session.error_message(),
            summary,
        }
    }
}

/// Escapes text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn accept_attribute() -> String {
    DocumentKind::EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[must_use]
pub fn render_page(view: &PageView<'_>) -> String {
    // Uploads are not kept between requests, so the name is only a reminder.
    let selected = view
        .selected_file
        .map(|name| {
            let retry = if view.error.is_some() {
                " Choose the file again to retry."
            } else {
                ""
            };
            format!(
                r#"<p class="note">Last uploaded: <strong>{}</strong>.{retry}</p>"#,
                escape_html(name)
            )
        })
        .unwrap_or_default();

    let error = view
        .error
        .map(|message| format!(r#"<div class="error-box">{}</div>"#, escape_html(message)))
        .unwrap_or_default();

    let summary = view
        .summary
        .map(|text| {
            format!(
                r#"<section id="summary">
            <p>Summary</p>
            <div class="summary-box">{}</div>
            <a class="button primary" href="/download" download="Summary.txt">Download Summary</a>
        </section>"#,
                escape_html(text)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{PAGE_TITLE}</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>📄</text></svg>">
    <style>{STYLES}</style>
</head>
<body>
    <main>
        <h1>{HEADING}</h1>
        <p>{SUBTITLE}</p>
        <form method="post" action="/summarize" enctype="multipart/form-data" onsubmit="{ON_SUBMIT}">
            <label for="file">Upload File</label>
            <input id="file" name="file" type="file" accept="{accept}" required>
            {selected}
            <button class="button" type="submit">Summarize</button>
            <p id="processing" class="processing" hidden>{PROCESSING_TEXT}</p>
        </form>
        {error}
        {summary}
    </main>
</body>
</html>
"#,
        accept = accept_attribute(),
    )
}
