use crate::error::{NeuroflowError, Result};
use crate::{io, paths};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Durable key-value persistence for named string blobs.
///
/// No transactions, no expiry. Callers JSON-encode structured values before
/// writing. Implementations must guarantee that a `set` observed by a later
/// `get` reflects the full written value (no partial writes).
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// File-per-key store under `<profile>/store/`, written atomically.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store under an initialized profile directory.
    ///
    /// Fails with [`NeuroflowError::NotInitialized`] when the profile has
    /// not been created yet (`neuroflow init`).
    pub fn open(root: &Path) -> Result<Self> {
        let dir = paths::store_dir(root);
        if !dir.is_dir() {
            return Err(NeuroflowError::NotInitialized);
        }
        Ok(Self { dir })
    }

    /// Create the backing directory and open the store. Idempotent.
    pub fn create(root: &Path) -> Result<Self> {
        let dir = paths::store_dir(root);
        io::ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> Result<PathBuf> {
        paths::validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key)?;
        io::atomic_write(&path, value.as_bytes())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path(key)?;
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::keys;
    use tempfile::TempDir;

    fn file_store() -> (FileStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::create(dir.path()).unwrap();
        (store, dir)
    }

    #[test]
    fn open_requires_init() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            FileStore::open(dir.path()),
            Err(NeuroflowError::NotInitialized)
        ));
    }

    #[test]
    fn set_get_roundtrip() {
        let (mut store, _dir) = file_store();
        store.set(keys::WELCOME_SEEN, "true").unwrap();
        assert_eq!(
            store.get(keys::WELCOME_SEEN).unwrap(),
            Some("true".to_string())
        );
    }

    #[test]
    fn get_missing_is_none() {
        let (store, _dir) = file_store();
        assert_eq!(store.get(keys::JOURNEY).unwrap(), None);
    }

    #[test]
    fn set_overwrites() {
        let (mut store, _dir) = file_store();
        store.set(keys::API_KEY, "first").unwrap();
        store.set(keys::API_KEY, "second").unwrap();
        assert_eq!(store.get(keys::API_KEY).unwrap(), Some("second".into()));
    }

    #[test]
    fn remove_is_idempotent() {
        let (mut store, _dir) = file_store();
        store.set(keys::ARCHETYPE, "{}").unwrap();
        store.remove(keys::ARCHETYPE).unwrap();
        store.remove(keys::ARCHETYPE).unwrap();
        assert_eq!(store.get(keys::ARCHETYPE).unwrap(), None);
    }

    #[test]
    fn rejects_traversal_keys() {
        let (mut store, _dir) = file_store();
        assert!(store.set("../outside", "x").is_err());
        assert!(store.get("a/b").is_err());
    }

    #[test]
    fn keys_are_independent() {
        let (mut store, _dir) = file_store();
        store.set(keys::ARCHETYPE, "a").unwrap();
        store.set(keys::JOURNEY, "j").unwrap();
        store.remove(keys::ARCHETYPE).unwrap();
        assert_eq!(store.get(keys::JOURNEY).unwrap(), Some("j".into()));
    }

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".into()));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
