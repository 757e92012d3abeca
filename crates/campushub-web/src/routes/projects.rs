use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use campushub_core::model::{Project, Session};
use campushub_core::session::SessionStore;

use crate::error::AppError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/projects", get(my_projects))
        .route("/projects/{id}/invite", post(invite_collaborators))
}

#[derive(Template)]
#[template(path = "my_projects.html")]
struct MyProjectsTemplate<'a> {
    session: Option<Session>,
    cards: Vec<ManagementCard<'a>>,
    notice: Option<String>,
}

struct ManagementCard<'a> {
    project: &'a Project,
    age: String,
}

async fn my_projects(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProjectsParams>,
) -> Result<Response, AppError> {
    // The one enforced auth gate: no session, no page.
    let Some(session) = state.sessions.get() else {
        return Ok(Redirect::to("/login").into_response());
    };

    let now = Utc::now();
    let cards: Vec<ManagementCard> = state
        .directory
        .projects_owned_by(session.id)
        .into_iter()
        .map(|p| ManagementCard {
            age: relative_age(p.created_at, now),
            project: p,
        })
        .collect();

    let notice = params
        .invited
        .and_then(|id| state.directory.project(id))
        .map(|p| {
            format!(
                "Invite flow for \"{}\" would open here. (Collaborator invites are not sent anywhere yet.)",
                p.title
            )
        });

    let tmpl = MyProjectsTemplate {
        session: Some(session),
        cards,
        notice,
    };
    Ok(Html(tmpl.render()?).into_response())
}

#[derive(Debug, Deserialize)]
pub struct ProjectsParams {
    invited: Option<u32>,
}

async fn invite_collaborators(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Response, AppError> {
    if state.sessions.get().is_none() {
        return Ok(Redirect::to("/login").into_response());
    }
    if state.directory.project(id).is_none() {
        return Ok(super::not_found().await.into_response());
    }

    // Same stub pattern as feed feedback: acknowledge, discard.
    tracing::info!(
        project_id = id,
        "collaborator invite requested, discarded (no backend yet)"
    );
    Ok(Redirect::to(&format!("/projects?invited={id}")).into_response())
}

/// "Created: ..." label on management cards.
fn relative_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - created).num_days();
    if days < 1 {
        "today".to_string()
    } else if days < 30 {
        format!("{days} day{} ago", if days == 1 { "" } else { "s" })
    } else if days < 365 {
        let months = days / 30;
        format!("{months} month{} ago", if months == 1 { "" } else { "s" })
    } else {
        let years = days / 365;
        format!("{years} year{} ago", if years == 1 { "" } else { "s" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_age_buckets() {
        let now = Utc::now();
        assert_eq!(relative_age(now, now), "today");
        assert_eq!(relative_age(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_age(now - Duration::days(12), now), "12 days ago");
        assert_eq!(relative_age(now - Duration::days(35), now), "1 month ago");
        assert_eq!(relative_age(now - Duration::days(64), now), "2 months ago");
        assert_eq!(relative_age(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn test_seeded_projects_read_as_months_old() {
        let now = Utc::now();
        let dir = campushub_core::directory::Directory::seeded();
        for project in dir.projects() {
            let age = relative_age(project.created_at, now);
            assert!(age.ends_with("ago"), "unexpected age label: {age}");
            assert!(age.contains("month"), "seed data should be months old: {age}");
        }
    }
}
