use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// One generic failure for every login mismatch. Callers must not be
    /// able to tell a wrong password from an unknown email or a wrong role.
    #[error("Login failed. Check email, password, and role.")]
    InvalidCredentials,

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, HubError>;
