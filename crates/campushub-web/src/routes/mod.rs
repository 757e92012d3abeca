pub mod auth;
pub mod feed;
pub mod projects;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Json, Redirect};
use axum::routing::get;
use axum::Router;

use crate::AppState;

/// The page entry points: one explicit route per page, all composing the
/// same base layout.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .merge(auth::routes())
        .merge(feed::routes())
        .merge(projects::routes())
        .fallback(not_found)
}

async fn index() -> Redirect {
    Redirect::to("/feed")
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "users": state.directory.users().len(),
        "projects": state.directory.projects().len(),
    }))
}

pub(crate) async fn not_found() -> (StatusCode, Html<String>) {
    let body = r#"<!doctype html>
<html><head><title>404 — CampusHub</title>
<style>body{font-family:system-ui;background:#f4f6f8;color:#1c2733;display:flex;justify-content:center;align-items:center;height:100vh;margin:0}
.box{text-align:center}
h1{font-size:4rem;color:#1d6fb8;margin:0}
p{color:#667;margin:0.5rem 0 1.5rem}
a{color:#1d6fb8;text-decoration:none;padding:0.5rem 1rem;border:1px solid #cfd8e3;border-radius:8px}
a:hover{border-color:#1d6fb8;background:rgba(29,111,184,0.08)}</style>
</head><body><div class="box"><h1>404</h1><p>This page doesn't exist.</p><a href="/feed">Back to the feed</a></div></body></html>"#;
    (StatusCode::NOT_FOUND, Html(body.to_string()))
}
