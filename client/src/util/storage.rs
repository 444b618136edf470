//! `localStorage`-backed [`KeyValueStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Every persisted value in the app goes through `prep::storage` helpers with
//! a `LocalStore` underneath. Outside the browser (SSR, native tests) the store
//! is empty and rejects writes with [`StoreError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Read failures collapse to "absent" so callers fall back to defaults. Write
//! failures are returned; [`log_write`] is the shared way to report them.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use prep::{KeyValueStore, StoreError};

/// Handle on the browser's `localStorage`, if one is reachable.
#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    #[cfg(feature = "hydrate")]
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn open() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| match w.local_storage() {
                Ok(storage) => storage,
                Err(e) => {
                    log::warn!("localStorage unavailable: {e:?}");
                    None
                }
            });
            Self { storage }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage.as_ref()?.get_item(key).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}

/// Report a failed save. The UI keeps its in-memory state either way.
pub fn log_write<T>(what: &str, result: Result<T, StoreError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(StoreError::Unavailable) => {
            log::debug!("skipped saving {what}: storage unavailable");
            None
        }
        Err(e) => {
            log::warn!("failed to save {what}: {e}");
            None
        }
    }
}
