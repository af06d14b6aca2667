//! Persistent Key-Value Storage
//!
//! Abstract string store plus the browser `localStorage` implementation.
//! Every persisted value is JSON, read with a fallback default and written
//! synchronously after each committed mutation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No storage area (private mode, no window, quota disabled)
    Unavailable(String),
    /// The store rejected a write (quota exceeded, security error)
    Write(String),
    /// The value could not be encoded
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous string key-value store
pub trait KeyValueStore {
    /// Read a raw value; `Ok(None)` when the key is absent
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a raw value, replacing any previous one
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

// ========================
// Browser localStorage
// ========================

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn area(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.area()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.area()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

// ========================
// In-memory store
// ========================

/// In-memory store; clones share the same entries, so a clone can stand in
/// for the same browser profile after a reload
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a key, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ========================
// JSON helpers
// ========================

/// Read and decode a JSON value.
///
/// Missing keys and unreadable storage yield `None`; so does a value that
/// fails to decode, which is logged.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("read {}: {}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring unparsable {}: {}", key, e);
            None
        }
    }
}

/// `load_json`, or `default` when nothing usable is stored
pub fn load_or<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    load_json(store, key).unwrap_or(default)
}

/// Read a JSON array entry by entry.
///
/// Entries that fail to decode are logged and skipped so the rest of the
/// list survives; a missing or non-array value yields an empty list.
pub fn load_list<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let entries: Vec<serde_json::Value> = load_or(store, key, Vec::new());
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("skipping {}[{}]: {}", key, index, e);
                None
            }
        })
        .collect()
}

/// Encode and write a JSON value
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let encoded = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.write(key, &encoded)
}

/// `save_json`, logging instead of failing
pub fn persist<T, S>(store: &S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    if let Err(e) = save_json(store, key, value) {
        log::warn!("persist {}: {}", key, e);
    }
}

/// Write a raw string, logging instead of failing
pub fn persist_raw<S>(store: &S, key: &str, value: &str)
where
    S: KeyValueStore + ?Sized,
{
    if let Err(e) = store.write(key, value) {
        log::warn!("persist {}: {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose writes always fail
    struct FullStorage;

    impl KeyValueStore for FullStorage {
        fn read(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn test_missing_key_falls_back() {
        let store = MemoryStorage::new();
        assert_eq!(load_json::<bool, _>(&store, "darkMode"), None);
        assert_eq!(load_or(&store, "pomodoroMinutes", 25u32), 25);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStorage::new();
        save_json(&store, "darkMode", &true).unwrap();
        assert_eq!(store.raw("darkMode").as_deref(), Some("true"));
        assert_eq!(load_json::<bool, _>(&store, "darkMode"), Some(true));
    }

    #[test]
    fn test_unparsable_value_falls_back() {
        let store = MemoryStorage::new();
        store.write("todos", "{not json").unwrap();
        let todos: Vec<String> = load_or(&store, "todos", Vec::new());
        assert!(todos.is_empty());
    }

    #[test]
    fn test_list_skips_only_bad_entries() {
        let store = MemoryStorage::new();
        store.write("pomodoroMinutes", "[1, \"two\", 3]").unwrap();
        let numbers: Vec<u32> = load_list(&store, "pomodoroMinutes");
        assert_eq!(numbers, vec![1, 3]);

        store.write("todos", "{\"not\": \"a list\"}").unwrap();
        assert!(load_list::<u32, _>(&store, "todos").is_empty());
        assert!(load_list::<u32, _>(&store, "missing").is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStorage::new();
        let reloaded = store.clone();
        persist(&store, "pomodoroSeconds", &42u32);
        assert_eq!(load_json::<u32, _>(&reloaded, "pomodoroSeconds"), Some(42));
    }

    #[test]
    fn test_write_failure_is_reported_not_fatal() {
        let err = save_json(&FullStorage, "todos", &Vec::<u32>::new()).unwrap_err();
        assert!(matches!(err, StorageError::Write(_)));
        assert!(err.to_string().contains("QuotaExceededError"));
        // persist swallows the error
        persist(&FullStorage, "todos", &Vec::<u32>::new());
    }
}
