//! The session store: one persisted entry holding the current login.
//!
//! This is the only state CampusHub writes anywhere. The file holds a single
//! JSON object `{id, username, role}`; absence or garbage both read as
//! "logged out". At most one session exists — `create` overwrites whole.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{HubError, Result};
use crate::model::Session;

pub trait SessionStore {
    /// The current session, or `None` when absent or unreadable. Malformed
    /// data is logged and swallowed — retrieval never fails.
    fn get(&self) -> Option<Session>;

    /// Persist `session`, replacing any prior value.
    fn create(&self, session: &Session) -> Result<()>;

    /// Remove the session. Not an error if none exists.
    fn destroy(&self) -> Result<()>;
}

/// Enum wrapper so handlers can hold one concrete store type.
/// File for the real binary, Memory for tests.
pub enum SessionBackend {
    File(FileSessionStore),
    Memory(MemorySessionStore),
}

impl SessionStore for SessionBackend {
    fn get(&self) -> Option<Session> {
        match self {
            SessionBackend::File(s) => s.get(),
            SessionBackend::Memory(s) => s.get(),
        }
    }

    fn create(&self, session: &Session) -> Result<()> {
        match self {
            SessionBackend::File(s) => s.create(session),
            SessionBackend::Memory(s) => s.create(session),
        }
    }

    fn destroy(&self) -> Result<()> {
        match self {
            SessionBackend::File(s) => s.destroy(),
            SessionBackend::Memory(s) => s.destroy(),
        }
    }
}

/// Stores the session as a single JSON file, by default at
/// `~/.config/campushub/session.json`.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location under the user config dir.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("campushub").join("session.json"))
            .ok_or_else(|| HubError::Config("cannot determine config directory".to_string()))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<Session> {
        if !self.path.exists() {
            return None;
        }
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("failed to read session file, treating as logged out: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("ignoring malformed session file: {e}");
                None
            }
        }
    }

    fn create(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let blob = serde_json::to_string(session)?;
        std::fs::write(&self.path, blob)?;
        Ok(())
    }

    fn destroy(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory store with the same single-entry semantics.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        match self.inner.lock() {
            Ok(guard) => guard.clone(),
            Err(e) => {
                tracing::warn!("session lock poisoned, treating as logged out: {e}");
                None
            }
        }
    }

    fn create(&self, session: &Session) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| HubError::Config(format!("session lock poisoned: {e}")))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn destroy(&self) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| HubError::Config(format!("session lock poisoned: {e}")))?;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn temp_store(name: &str) -> FileSessionStore {
        let dir = std::env::temp_dir()
            .join("campushub-test-sessions")
            .join(format!("{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).ok();
        FileSessionStore::new(dir.join("session.json"))
    }

    fn sample() -> Session {
        Session {
            id: 201,
            username: "drchen".into(),
            role: Role::Faculty,
        }
    }

    #[test]
    fn test_absent_file_reads_as_logged_out() {
        let store = temp_store("absent");
        store.destroy().unwrap();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_create_then_get_roundtrip() {
        let store = temp_store("roundtrip");
        store.create(&sample()).unwrap();
        let got = store.get().unwrap();
        assert_eq!(got, sample());
        store.destroy().unwrap();
    }

    #[test]
    fn test_create_overwrites_prior_session() {
        let store = temp_store("overwrite");
        store.create(&sample()).unwrap();
        let student = Session {
            id: 101,
            username: "jsmith24".into(),
            role: Role::Student,
        };
        store.create(&student).unwrap();
        assert_eq!(store.get().unwrap().id, 101);
        store.destroy().unwrap();
    }

    #[test]
    fn test_malformed_blob_reads_as_logged_out() {
        let store = temp_store("malformed");
        for garbage in ["", "not json", "{\"id\":", "[1,2,3]", "{\"id\":\"abc\"}"] {
            std::fs::write(store.path(), garbage).unwrap();
            assert!(store.get().is_none(), "garbage {garbage:?} should read as None");
        }
        store.destroy().unwrap();
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let store = temp_store("destroy");
        store.create(&sample()).unwrap();
        store.destroy().unwrap();
        assert!(store.get().is_none());
        // Second destroy with nothing there must also succeed.
        store.destroy().unwrap();
    }

    #[test]
    fn test_memory_store_matches_file_semantics() {
        let store = MemorySessionStore::new();
        assert!(store.get().is_none());
        store.create(&sample()).unwrap();
        assert_eq!(store.get().unwrap().username, "drchen");
        store.destroy().unwrap();
        assert!(store.get().is_none());
        store.destroy().unwrap();
    }

    #[test]
    fn test_backend_dispatch() {
        let backend = SessionBackend::Memory(MemorySessionStore::new());
        backend.create(&sample()).unwrap();
        assert_eq!(backend.get().unwrap().id, 201);
        backend.destroy().unwrap();
        assert!(backend.get().is_none());
    }

    #[test]
    fn test_persisted_blob_shape() {
        // The file must stay a flat {id, username, role} object.
        let store = temp_store("shape");
        store.create(&sample()).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["id"], 201);
        assert_eq!(value["username"], "drchen");
        assert_eq!(value["role"], "faculty");
        assert!(value.get("email").is_none());
        assert!(value.get("password").is_none());
        store.destroy().unwrap();
    }
}
