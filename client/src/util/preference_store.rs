//! Browser `localStorage` access behind a never-failing preference contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme preference is the only durable value the site keeps. Storage can
//! be disabled (private browsing), full, or absent outside the browser, so the
//! store swallows backend errors and degrades to an in-memory map that holds
//! the preference for the rest of the session.
//!
//! TRADE-OFFS
//! ==========
//! A failed write or removal is recorded as a per-key session override that
//! shadows the backend until a later durable write succeeds. Reads keep
//! working against a backend that rejects writes (quota exceeded), so the
//! override has to win over a successful read. `set` reports the durable
//! result so callers can tell the value will not survive a reload.

#[cfg(test)]
#[path = "preference_store_test.rs"]
mod preference_store_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Errors raised by a key-value backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (no window, storage disabled, non-browser build).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected the operation (quota exceeded, security error).
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Raw string key-value backend.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// The browser's origin-scoped `localStorage`.
///
/// Without the `csr` feature every call reports [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(err) => Err(StorageError::Backend(format!("{err:?}"))),
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Backend(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Backend(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|err| StorageError::Backend(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Process-local backend. Survives nothing; useful off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Safe get/set/remove over a [`KeyValueStore`]. Never panics, never returns
/// backend errors.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    backend: S,
    /// `Some` pins a value, `None` pins an absence.
    overrides: RefCell<HashMap<String, Option<String>>>,
    warned: Cell<bool>,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            overrides: RefCell::new(HashMap::new()),
            warned: Cell::new(false),
        }
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read `key`. A session override wins; backend read failures count as
    /// absent.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(pinned) = self.overrides.borrow().get(key) {
            return pinned.clone();
        }
        match self.backend.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                self.note_failure("get", &err);
                None
            }
        }
    }

    /// Write `key`. Returns `false` when the durable write failed; the value is
    /// still kept for the session.
    pub fn set(&self, key: &str, value: &str) -> bool {
        match self.backend.set_item(key, value) {
            Ok(()) => {
                self.overrides.borrow_mut().remove(key);
                true
            }
            Err(err) => {
                self.note_failure("set", &err);
                self.overrides.borrow_mut().insert(key.to_owned(), Some(value.to_owned()));
                false
            }
        }
    }

    /// Remove `key`. A failed removal still hides the key for the session.
    pub fn remove(&self, key: &str) {
        match self.backend.remove_item(key) {
            Ok(()) => {
                self.overrides.borrow_mut().remove(key);
            }
            Err(err) => {
                self.note_failure("remove", &err);
                self.overrides.borrow_mut().insert(key.to_owned(), None);
            }
        }
    }

    /// Whether any backend call has failed so far.
    pub fn is_degraded(&self) -> bool {
        self.warned.get()
    }

    fn note_failure(&self, op: &str, err: &StorageError) {
        if !self.warned.replace(true) {
            log::warn!("preference store {op} failed, keeping preferences in memory: {err}");
        }
    }
}
