use serde::{Deserialize, Serialize};

/// Campus role. Doubles as the access level on feed cards: faculty can open
/// any project's source link, students only their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Faculty,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Faculty => write!(f, "faculty"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    // Deliberately exact: login matches the submitted role verbatim, so
    // "Faculty" or stray whitespace is just another failed login.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "faculty" => Ok(Self::Faculty),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// A directory account. Static demo data — never created or mutated at
/// runtime, and the password is plaintext because this is seed data for a
/// mock login, not an auth system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub skills: Vec<String>,
}
