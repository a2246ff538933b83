//! Key-Value Storage
//!
//! One string value per named slot. `BrowserStorage` talks to
//! `window.localStorage`; tests use the in-memory `MemoryStore`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
    #[error("could not encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Rejected(format!("{:?}", value))
    }
}

/// Named-slot string storage
pub trait KeyValueStore {
    /// Raw text in `key`, or `None` when the slot is empty or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite `key` with `value`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read `key` and decode it as JSON.
///
/// Returns `None` for an empty slot. A slot holding text that does not
/// decode as `T` is logged and also treated as empty.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[storage] ignoring unreadable slot '{}': {}", key, e);
            None
        }
    }
}

/// Encode `value` as JSON and write it to `key`.
pub fn save_json<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use super::{KeyValueStore, StorageError};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory slots; clones share the same map
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStore {
        slots: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Store pre-seeded with one slot
        pub fn with_slot(key: &str, value: &str) -> Self {
            let store = Self::new();
            store.slots.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.slots.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;

    #[test]
    fn test_memory_store_clones_share_slots() {
        let store = MemoryStore::new();
        let view = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(view.get("k").as_deref(), Some("v"));
        assert_eq!(view.get("missing"), None);
    }

    #[test]
    fn test_load_json_ignores_garbage() {
        let store = MemoryStore::with_slot("people", "{not json");
        let loaded: Option<Vec<Person>> = load_json(&store, "people");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_json() {
        let store = MemoryStore::new();
        let people = vec![Person::new(1, "Ada"), Person::new(2, "Grace")];
        save_json(&store, "people", &people).unwrap();

        let loaded: Vec<Person> = load_json(&store, "people").unwrap();
        assert_eq!(loaded, people);
    }
}
