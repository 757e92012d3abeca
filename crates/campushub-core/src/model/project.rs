use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A showcased project. Static demo data, like [`super::User`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub owner_id: u32,
    /// Display name shown on cards ("Posted by"), e.g. "Dr. Chen (Faculty)".
    pub owner: String,
    pub owner_username: String,
    pub description: String,
    pub tech_stack: String,
    pub status: String,
    pub feedback_count: u32,
    /// Flagged for the general feed, independent of ownership.
    pub is_suggested: bool,
    /// Seed flag only. NOT derived from any session — real ownership is
    /// always `owner_id == session.id`. Do not branch on this.
    pub is_owned: bool,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// True iff the given user leads this project.
    pub fn is_owned_by(&self, user_id: u32) -> bool {
        self.owner_id == user_id
    }
}
