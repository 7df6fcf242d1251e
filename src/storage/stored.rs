use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::store::Storage;

/// One typed value kept under a key of a [`Storage`].
///
/// The in-memory value is the source of truth for the owner; writes to the
/// storage are best effort.
#[derive(Debug, Clone)]
pub struct Stored<T> {
    key: String,
    value: T,
}

impl<T: Serialize + DeserializeOwned> Stored<T> {
    /// Read `key`, falling back to `initial` when it is missing or unreadable
    pub fn load(storage: &Storage, key: impl Into<String>, initial: T) -> Self {
        let key = key.into();
        let value = match storage.get::<T>(&key) {
            Ok(Some(value)) => value,
            Ok(None) => initial,
            Err(e) => {
                warn!(key = %key, error = %e, "ignoring stored value");
                initial
            }
        };
        Self { key, value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set(&mut self, storage: &mut Storage, value: T) {
        self.value = value;
        if let Err(e) = storage.set(&self.key, &self.value) {
            warn!(key = %self.key, error = %e, "failed to persist value");
        }
    }

    /// Set a value computed from the current one
    pub fn update(&mut self, storage: &mut Storage, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(storage, next);
    }

    /// Delete the key from storage; the in-memory value is left as is
    pub fn remove(&self, storage: &mut Storage) {
        if let Err(e) = storage.remove(&self.key) {
            warn!(key = %self.key, error = %e, "failed to remove value");
        }
    }
}
