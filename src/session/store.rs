//! Session store abstraction and implementations.
//!
//! The store holds at most one record: the current user. It is injected into
//! [`StorefrontClient`](crate::StorefrontClient) so flows can be tested
//! against [`MemorySessionStore`] while deployments persist the record with
//! [`FileSessionStore`].

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::session::CurrentUser;

/// Errors raised by session store operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing storage could not be read or written.
    #[error("session storage error: {0}")]
    Storage(#[from] io::Error),

    /// The stored record is not valid JSON for a user record.
    #[error("stored session record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persistent cache for the current user record.
///
/// Implementations hold exactly one record. All three operations are
/// infallible in the happy path and surface storage problems as
/// [`SessionError`]; no staleness validation is performed.
pub trait SessionStore: Send + Sync {
    /// Reads and parses the stored record, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the storage cannot be read or the record
    /// cannot be parsed.
    fn get(&self) -> Result<Option<CurrentUser>, SessionError>;

    /// Serializes and stores the record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the record cannot be written.
    fn set(&self, user: &CurrentUser) -> Result<(), SessionError>;

    /// Removes the stored record, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the storage cannot be cleared.
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-memory session store.
///
/// Holds the record behind a `Mutex`; the default for tests and for
/// embedders that manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: Mutex<Option<CurrentUser>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<CurrentUser>, SessionError> {
        let guard = self.user.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn set(&self, user: &CurrentUser) -> Result<(), SessionError> {
        let mut guard = self.user.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self.user.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = None;
        Ok(())
    }
}

/// File-backed session store.
///
/// Persists the record as JSON text in a single file, the local-device
/// equivalent of the browser's origin-scoped storage key. A missing file
/// means no session.
///
/// # Example
///
/// ```rust,no_run
/// use tienda_sdk::{FileSessionStore, SessionStore};
///
/// let store = FileSessionStore::new("/tmp/tienda-session.json");
/// assert!(store.get().unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file is created on the first [`set`](SessionStore::set).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<CurrentUser>, SessionError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let user = serde_json::from_str(&text)?;
        Ok(Some(user))
    }

    fn set(&self, user: &CurrentUser) -> Result<(), SessionError> {
        let text = serde_json::to_string(user)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> CurrentUser {
        CurrentUser {
            id: 7,
            first_name: "Ana".to_string(),
            last_name: "Reyes".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            address: None,
        }
    }

    #[test]
    fn test_memory_store_set_get_clear() {
        let store = MemorySessionStore::new();
        assert!(store.get().unwrap().is_none());

        store.set(&sample_user()).unwrap();
        assert_eq!(store.get().unwrap(), Some(sample_user()));

        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_set_replaces_previous_record() {
        let store = MemorySessionStore::new();
        store.set(&sample_user()).unwrap();

        let mut other = sample_user();
        other.id = 8;
        store.set(&other).unwrap();

        assert_eq!(store.get().unwrap().unwrap().id, 8);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert!(store.get().unwrap().is_none());

        store.set(&sample_user()).unwrap();
        assert_eq!(store.get().unwrap(), Some(sample_user()));

        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn test_file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_corrupt_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let store = FileSessionStore::new(path);
        assert!(matches!(store.get(), Err(SessionError::Corrupt(_))));
    }

    #[test]
    fn test_stores_are_object_safe() {
        let _: Box<dyn SessionStore> = Box::new(MemorySessionStore::new());
        let _: Box<dyn SessionStore> = Box::new(FileSessionStore::new("/tmp/x.json"));
    }
}
