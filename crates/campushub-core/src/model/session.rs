use serde::{Deserialize, Serialize};

use crate::model::{Role, User};

/// The logged-in identity. The only record CampusHub ever creates or
/// destroys at runtime; its lifetime is the session store's single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: u32,
    pub username: String,
    pub role: Role,
}

impl Session {
    /// Derive a session from a directory account. Email and password are
    /// dropped here — only id, username, and role are ever persisted.
    pub fn for_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }

    pub fn is_faculty(&self) -> bool {
        self.role == Role::Faculty
    }
}
