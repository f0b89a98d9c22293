//! Key/value stores backing a [`SessionContext`](crate::SessionContext).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

/// Minimal string store with browser-storage semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`AuthError::StoreError`] if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StoreError`] if the change cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<(), AuthError>;

    fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Process-local store, used for tests and one-shot sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AuthError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON-object file store. Every write rewrites the file.
///
/// On Unix the parent directory is `0700` and the file `0600`, since the
/// session store holds the bearer token.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open `path`, reading existing entries if the file exists.
    ///
    /// An unreadable or corrupt file is treated as empty (and overwritten on
    /// the next write) so a damaged session never blocks logging in again.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path).unwrap_or_default();
        Self { path, entries }
    }

    fn persist(&self) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AuthError::StoreError(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let body = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| AuthError::StoreError(format!("serialize: {e}")))?;
        fs::write(&self.path, body)
            .map_err(|e| AuthError::StoreError(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::StoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }
}

fn load_entries(path: &Path) -> Option<BTreeMap<String, String>> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(entries) => Some(entries),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "ignoring corrupt session store");
            None
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), AuthError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert!(!store.is_set("token"));
        store.set("token", "abc").unwrap();
        assert_eq!(store.get("token").as_deref(), Some("abc"));
        store.remove("token").unwrap();
        assert!(!store.is_set("token"));
        store.remove("token").unwrap();
    }

    #[test]
    fn file_store_persists_across_opens() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("nested").join("session.json");

        let mut store = FileStore::open(&path);
        store.set("token", "jwt_abc123").unwrap();
        store.set("snapshot", "true").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("token").as_deref(), Some("jwt_abc123"));
        assert!(reopened.is_set("snapshot"));
    }

    #[test]
    fn file_store_remove_persists() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");

        let mut store = FileStore::open(&path);
        store.set("token", "jwt").unwrap();
        store.remove("token").unwrap();

        assert!(!FileStore::open(&path).is_set("token"));
    }

    #[cfg(unix)]
    #[test]
    fn file_store_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        FileStore::open(&path).set("token", "jwt").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "session file should be 0600");
    }

    #[test]
    fn corrupt_file_is_treated_as_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(&path);
        assert!(!store.is_set("token"));
        store.set("token", "fresh").unwrap();
        assert_eq!(FileStore::open(&path).get("token").as_deref(), Some("fresh"));
    }
}
