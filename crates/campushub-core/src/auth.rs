//! Mock login and logout over the directory and the session store.

use crate::directory::Directory;
use crate::error::{HubError, Result};
use crate::model::{Role, Session};
use crate::session::SessionStore;

/// What the login form submits. The role arrives as a select value and is
/// parsed before it gets here; an unparseable role never reaches the scan.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Scan the directory for an exact three-field match and persist the derived
/// session. Any mismatch is the same [`HubError::InvalidCredentials`].
pub fn login(
    directory: &Directory,
    store: &impl SessionStore,
    credentials: &Credentials,
) -> Result<Session> {
    let user = directory
        .find_login(&credentials.email, &credentials.password, credentials.role)
        .ok_or(HubError::InvalidCredentials)?;

    let session = Session::for_user(user);
    store.create(&session)?;
    tracing::info!(user = %session.username, role = %session.role, "logged in");
    Ok(session)
}

/// Drop the current session, if any.
pub fn logout(store: &impl SessionStore) -> Result<()> {
    if let Some(session) = store.get() {
        tracing::info!(user = %session.username, "logged out");
    }
    store.destroy()
}
