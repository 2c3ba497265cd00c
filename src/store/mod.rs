//! Key-value persistence for tournament data.
//!
//! The store is a flat mapping from string keys to JSON values, read and
//! written whole. Two collections live in it, [`TOURNAMENTS_KEY`] and
//! [`MATCHES_KEY`], each a JSON array, plus the [`ADMIN_SESSION_KEY`] flag.
//! Callers inject a [`Store`] implementation instead of reaching for global
//! state, which keeps the aggregation code pure.

#[cfg(feature = "persistent")]
mod disk;
mod error;
mod memory;

#[cfg(feature = "persistent")]
pub use disk::DiskStore;
pub use error::StoreError;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::logging::{debug, error};

/// Key holding the JSON array of tournaments.
pub const TOURNAMENTS_KEY: &str = "tournaments";

/// Key holding the JSON array of match records.
pub const MATCHES_KEY: &str = "matches";

/// Key holding the admin session flag (`"true"` while logged in).
pub const ADMIN_SESSION_KEY: &str = "adminLoggedIn";

/// A persistent mapping from string keys to JSON values.
///
/// No transactions: each call stands alone, and a multi-key update is a
/// sequence of independent writes.
pub trait Store {
    /// Read the value under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for &mut S {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Read a JSON array collection. A missing key (or `null`) reads as empty.
pub fn load_collection<T, S>(store: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: Store + ?Sized,
{
    let items: Vec<T> = match store.get(key)? {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => {
            serde_json::from_value(value).map_err(|source| {
                error!(key = key, error = %source, "stored collection is unreadable");
                StoreError::InvalidCollection {
                    key: key.to_string(),
                    source,
                }
            })?
        }
    };
    debug!(key = key, count = items.len(), "loaded collection");
    Ok(items)
}

/// Write a collection back as a JSON array, replacing what was there.
pub fn save_collection<T, S>(store: &mut S, key: &str, items: &[T]) -> Result<(), StoreError>
where
    T: Serialize,
    S: Store + ?Sized,
{
    let value = serde_json::to_value(items)?;
    debug!(key = key, count = items.len(), "saving collection");
    store.set(key, value)
}
