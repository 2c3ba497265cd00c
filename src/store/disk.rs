//! On-disk store backed by fjall.

use std::path::{Path, PathBuf};

use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};
use serde_json::Value;

use crate::logging::{debug, info, trace};

use super::{Store, StoreError};

/// Keyspace holding the user-visible key-value pairs.
const DATA_KEYSPACE: &str = "local";

/// Keyspace holding store bookkeeping.
const META_KEYSPACE: &str = "_meta";
const META_CONFIG_KEY: &str = "config";

/// Current store format version.
const STORE_VERSION: u32 = 1;

/// A [`Store`] persisted in a fjall database directory.
///
/// Values are stored as JSON bytes, one entry per key. Every write is synced
/// before returning.
pub struct DiskStore {
    db: fjall::Database,
    data: Keyspace,
    path: PathBuf,
}

impl DiskStore {
    /// Open an existing store at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotInitialized(path.display().to_string()));
        }

        let db = fjall::Database::builder(path).open()?;
        let meta = db.keyspace(META_KEYSPACE, KeyspaceCreateOptions::default)?;

        let Some(config) = meta.get(META_CONFIG_KEY)? else {
            return Err(StoreError::NotInitialized(path.display().to_string()));
        };
        let version = u32::from_le_bytes(
            config
                .as_ref()
                .try_into()
                .map_err(|_| StoreError::InvalidFormat("Invalid config format".to_string()))?,
        );
        if version != STORE_VERSION {
            return Err(StoreError::InvalidFormat(format!(
                "Store version mismatch: expected {}, got {}",
                STORE_VERSION, version
            )));
        }

        let data = db.keyspace(DATA_KEYSPACE, KeyspaceCreateOptions::default)?;
        debug!(path = %path.display(), "opened store");

        Ok(Self {
            db,
            data,
            path: path.to_path_buf(),
        })
    }

    /// Initialize a store at the given path. Existing data is kept.
    pub fn init(path: &Path) -> Result<Self, StoreError> {
        let db = fjall::Database::builder(path).open()?;
        let meta = db.keyspace(META_KEYSPACE, KeyspaceCreateOptions::default)?;
        meta.insert(META_CONFIG_KEY, STORE_VERSION.to_le_bytes())?;

        let data = db.keyspace(DATA_KEYSPACE, KeyspaceCreateOptions::default)?;
        db.persist(PersistMode::SyncAll)?;
        info!(path = %path.display(), "initialized store");

        Ok(Self {
            db,
            data,
            path: path.to_path_buf(),
        })
    }

    /// Directory this store lives in.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for DiskStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let Some(slice) = self.data.get(key)? else {
            return Ok(None);
        };
        let bytes: &[u8] = slice.as_ref();
        trace!(key = key, len = bytes.len(), "read value");
        Ok(Some(serde_json::from_slice(bytes)?))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&value)?;
        trace!(key = key, len = bytes.len(), "write value");
        self.data.insert(key, bytes.as_slice())?;
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.data.remove(key)?;
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_open_uninitialized() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            DiskStore::open(&missing),
            Err(StoreError::NotInitialized(_))
        ));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store");

        {
            let mut store = DiskStore::init(&path).unwrap();
            store.set("tournaments", json!([{"id": "t1"}])).unwrap();
            store.set("adminLoggedIn", json!("true")).unwrap();
            store.remove("adminLoggedIn").unwrap();
        }

        let store = DiskStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert_eq!(
            store.get("tournaments").unwrap(),
            Some(json!([{"id": "t1"}]))
        );
        assert_eq!(store.get("adminLoggedIn").unwrap(), None);
    }
}
