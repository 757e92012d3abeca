use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use campushub_core::auth::{self, Credentials};
use campushub_core::error::HubError;
use campushub_core::model::{Role, Session};
use campushub_core::session::SessionStore;

use crate::error::AppError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login_form).post(submit_login))
        .route("/logout", post(submit_logout))
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    session: Option<Session>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
    role: String,
}

async fn login_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let tmpl = LoginTemplate {
        session: state.sessions.get(),
        error: None,
    };
    Ok(Html(tmpl.render()?))
}

async fn submit_login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    // An unknown role string is just another failed login, same as a typo'd
    // password; the form never learns which field was wrong.
    let Ok(role) = form.role.parse::<Role>() else {
        return login_failed(&state);
    };

    let credentials = Credentials {
        email: form.email,
        password: form.password,
        role,
    };

    match auth::login(&state.directory, &state.sessions, &credentials) {
        Ok(_) => Ok(Redirect::to("/feed").into_response()),
        Err(HubError::InvalidCredentials) => login_failed(&state),
        Err(e) => Err(e.into()),
    }
}

fn login_failed(state: &AppState) -> Result<Response, AppError> {
    tracing::info!("rejected login attempt");
    let tmpl = LoginTemplate {
        session: state.sessions.get(),
        error: Some(HubError::InvalidCredentials.to_string()),
    };
    Ok(Html(tmpl.render()?).into_response())
}

async fn submit_logout(State(state): State<Arc<AppState>>) -> Result<Redirect, AppError> {
    auth::logout(&state.sessions)?;
    Ok(Redirect::to("/login"))
}
