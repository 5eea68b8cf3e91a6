use super::*;

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Backend("SecurityError".to_owned()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("QuotaExceededError".to_owned()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Reads succeed; writes and removals are rejected, as with a full quota.
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl ReadOnlyStore {
    fn seeded(key: &str, value: &str) -> Self {
        Self {
            inner: MemoryStore::with_entry(key, value),
        }
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("QuotaExceededError".to_owned()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("QuotaExceededError".to_owned()))
    }
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_round_trips_values() {
    let store = PreferenceStore::new(MemoryStore::new());
    assert_eq!(store.get("k"), None);
    assert!(store.set("k", "dark"));
    assert_eq!(store.get("k"), Some("dark".to_owned()));
    store.remove("k");
    assert_eq!(store.get("k"), None);
    assert!(!store.is_degraded());
}

#[test]
fn memory_store_with_entry_is_seeded() {
    let store = PreferenceStore::new(MemoryStore::with_entry("theme", "light"));
    assert_eq!(store.get("theme"), Some("light".to_owned()));
}

// =============================================================
// Degraded backends
// =============================================================

#[test]
fn failing_backend_set_reports_false_but_keeps_session_value() {
    let store = PreferenceStore::new(FailingStore);
    assert!(!store.set("theme", "dark"));
    assert_eq!(store.get("theme"), Some("dark".to_owned()));
    assert!(store.is_degraded());
}

#[test]
fn failing_backend_get_returns_absent_when_nothing_was_set() {
    let store = PreferenceStore::new(FailingStore);
    assert_eq!(store.get("theme"), None);
}

#[test]
fn failing_backend_remove_clears_session_value() {
    let store = PreferenceStore::new(FailingStore);
    store.set("theme", "dark");
    store.remove("theme");
    assert_eq!(store.get("theme"), None);
}

#[test]
fn rejected_write_shadows_readable_backend_value() {
    let store = PreferenceStore::new(ReadOnlyStore::seeded("theme", "light"));
    assert!(!store.set("theme", "dark"));
    assert_eq!(store.get("theme"), Some("dark".to_owned()));
    assert_eq!(store.backend().inner.get_item("theme"), Ok(Some("light".to_owned())));
    assert!(store.is_degraded());
}

#[test]
fn rejected_remove_hides_readable_backend_value() {
    let store = PreferenceStore::new(ReadOnlyStore::seeded("theme", "light"));
    store.remove("theme");
    assert_eq!(store.get("theme"), None);
}

#[test]
fn rejected_remove_after_rejected_set_stays_absent() {
    let store = PreferenceStore::new(ReadOnlyStore::seeded("theme", "light"));
    store.set("theme", "dark");
    store.remove("theme");
    assert_eq!(store.get("theme"), None);
}

#[test]
fn successful_write_clears_session_override() {
    let store = PreferenceStore::new(MemoryStore::new());
    store.overrides.borrow_mut().insert("theme".to_owned(), None);
    assert!(store.set("theme", "dark"));
    assert!(store.overrides.borrow().is_empty());
    assert_eq!(store.get("theme"), Some("dark".to_owned()));
}

#[test]
fn local_storage_is_unavailable_off_browser() {
    #[cfg(not(feature = "csr"))]
    {
        assert_eq!(LocalStorageStore.get_item("k"), Err(StorageError::Unavailable));
        let store = PreferenceStore::new(LocalStorageStore);
        assert!(!store.set("k", "v"));
        assert_eq!(store.get("k"), Some("v".to_owned()));
    }
}

#[test]
fn storage_error_messages_are_readable() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(
        StorageError::Backend("QuotaExceededError".to_owned()).to_string(),
        "storage operation failed: QuotaExceededError"
    );
}
