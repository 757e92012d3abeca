use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use campushub_core::model::{Project, Session};
use campushub_core::session::SessionStore;

use crate::error::AppError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/feed", get(show_feed))
        .route("/feed/{id}/feedback", post(submit_feedback))
}

#[derive(Template)]
#[template(path = "feed.html")]
struct FeedTemplate<'a> {
    session: Option<Session>,
    cards: Vec<FeedCard<'a>>,
    notice: Option<String>,
}

struct FeedCard<'a> {
    project: &'a Project,
    /// `Some("Faculty")` or `Some("Owner")` when the source link shows;
    /// faculty wins when both apply.
    source_access: Option<&'static str>,
}

/// The one access-control branch in CampusHub: faculty see every source
/// link, everyone else only their own projects'.
fn source_access(session: Option<&Session>, project: &Project) -> Option<&'static str> {
    match session {
        Some(s) if s.is_faculty() => Some("Faculty"),
        Some(s) if project.is_owned_by(s.id) => Some("Owner"),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    submitted: Option<u32>,
}

async fn show_feed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeedParams>,
) -> Result<Html<String>, AppError> {
    // Visitors without a session still get the feed; only the source-link
    // branch reacts to who is logged in.
    let session = state.sessions.get();

    let cards: Vec<FeedCard> = state
        .directory
        .suggested_projects()
        .into_iter()
        .map(|p| FeedCard {
            source_access: source_access(session.as_ref(), p),
            project: p,
        })
        .collect();

    let notice = params
        .submitted
        .and_then(|id| state.directory.project(id))
        .map(|p| {
            format!(
                "Feedback submitted for \"{}\". (This would be sent to the backend.)",
                p.title
            )
        });

    let tmpl = FeedTemplate {
        session,
        cards,
        notice,
    };
    Ok(Html(tmpl.render()?))
}

#[derive(Debug, Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    message: String,
}

async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Form(form): Form<FeedbackForm>,
) -> Result<Response, AppError> {
    if state.directory.project(id).is_none() {
        return Ok(super::not_found().await.into_response());
    }

    // Acknowledged locally and discarded; counts never move.
    tracing::info!(
        project_id = id,
        chars = form.message.len(),
        "feedback received, discarded (no backend yet)"
    );
    Ok(Redirect::to(&format!("/feed?submitted={id}")).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campushub_core::directory::Directory;
    use campushub_core::model::Role;

    fn session(id: u32, role: Role) -> Session {
        Session {
            id,
            username: "someone".into(),
            role,
        }
    }

    #[test]
    fn test_source_access_without_session() {
        let dir = Directory::seeded();
        for project in dir.projects() {
            assert_eq!(source_access(None, project), None);
        }
    }

    #[test]
    fn test_source_access_faculty_sees_everything() {
        let dir = Directory::seeded();
        let s = session(201, Role::Faculty);
        for project in dir.projects() {
            assert_eq!(source_access(Some(&s), project), Some("Faculty"));
        }
    }

    #[test]
    fn test_source_access_owner_only_on_own_cards() {
        let dir = Directory::seeded();
        let s = session(101, Role::Student);
        let by_id: Vec<(u32, Option<&str>)> = dir
            .projects()
            .iter()
            .map(|p| (p.id, source_access(Some(&s), p)))
            .collect();
        assert_eq!(
            by_id,
            vec![(1, Some("Owner")), (2, None), (3, Some("Owner"))]
        );
    }

    #[test]
    fn test_faculty_label_wins_over_ownership() {
        let dir = Directory::seeded();
        let s = session(201, Role::Faculty);
        // Project 2 is owned by 201, but the faculty label takes precedence.
        let project = dir.project(2).unwrap();
        assert_eq!(source_access(Some(&s), project), Some("Faculty"));
    }
}
