use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Application error type that renders as an HTML error page.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("web error: {:#}", self.0);

        let body = format!(
            r#"<!doctype html>
<html><head><title>Error — CampusHub</title>
<style>body{{font-family:system-ui;background:#f4f6f8;color:#1c2733;display:flex;justify-content:center;align-items:center;height:100vh;margin:0}}
.err{{background:#fff;padding:2rem;border-radius:8px;border-left:4px solid #c0392b;max-width:600px;box-shadow:0 1px 4px rgba(0,0,0,0.1)}}
h1{{color:#c0392b;margin-top:0}}pre{{white-space:pre-wrap;color:#555}}</style>
</head><body><div class="err"><h1>Something went wrong</h1><pre>{}</pre>
<p><a href="/feed" style="color:#1d6fb8">Back to the feed</a></p></div></body></html>"#,
            html_escape(&format!("{:#}", self.0))
        );
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
