//! Key/Value Storage
//!
//! Small accessors over browser-style storage. Storage is optional: every
//! accessor here fails closed, so a disabled or full store never breaks
//! the page.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{LandingError, Result};

/// Storage key of the saved language preference
pub const LANGUAGE_KEY: &str = "language";

const CHAT_DETAILS_PREFIX: &str = "chatDetails:";

/// String key/value store (`localStorage` in the browser)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// In-memory store (native builds and tests)
#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> LandingError {
    LandingError::Storage("store lock poisoned".into())
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.remove(key);
        Ok(())
    }
}

/// Per-chat details stored under `chatDetails:<chat_id>`
pub struct ChatDetails<S> {
    store: S,
}

impl<S: KeyValueStore> ChatDetails<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub fn key(chat_id: &str) -> String {
        format!("{CHAT_DETAILS_PREFIX}{chat_id}")
    }

    /// Stored details, or `""` when missing or unreadable
    pub fn get(&self, chat_id: &str) -> String {
        match self.store.get_item(&Self::key(chat_id)) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                tracing::debug!(chat_id = %chat_id, error = %e, "Chat details unreadable");
                String::new()
            }
        }
    }

    pub fn set(&self, chat_id: &str, details: &str) {
        if let Err(e) = self.store.set_item(&Self::key(chat_id), details) {
            tracing::debug!(chat_id = %chat_id, error = %e, "Chat details not saved");
        }
    }

    pub fn remove(&self, chat_id: &str) {
        if let Err(e) = self.store.remove_item(&Self::key(chat_id)) {
            tracing::debug!(chat_id = %chat_id, error = %e, "Chat details not removed");
        }
    }
}

/// Saved language preference, if any and readable
pub fn load_language<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
    store.get_item(LANGUAGE_KEY).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Language preference unreadable");
        None
    })
}

pub fn save_language<S: KeyValueStore + ?Sized>(store: &S, language: &str) {
    if let Err(e) = store.set_item(LANGUAGE_KEY, language) {
        tracing::debug!(error = %e, "Language preference not saved");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Behaves like storage disabled by the browser
    struct DisabledStore;

    impl KeyValueStore for DisabledStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(LandingError::Storage("SecurityError".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(LandingError::Storage("QuotaExceededError".into()))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(LandingError::Storage("SecurityError".into()))
        }
    }

    #[test]
    fn test_chat_details_lifecycle() {
        let details = ChatDetails::new(MemoryStore::new());

        assert_eq!(details.get("abc"), "");

        details.set("abc", "x");
        assert_eq!(details.get("abc"), "x");
        assert_eq!(details.get("other"), "");

        details.remove("abc");
        assert_eq!(details.get("abc"), "");
    }

    #[test]
    fn test_chat_details_key_prefix() {
        let store = MemoryStore::new();
        ChatDetails::new(&store).set("42", "pinned");

        assert_eq!(store.get_item("chatDetails:42").unwrap().as_deref(), Some("pinned"));
    }

    #[test]
    fn test_chat_details_fail_closed() {
        let details = ChatDetails::new(DisabledStore);

        details.set("abc", "x");
        details.remove("abc");
        assert_eq!(details.get("abc"), "");
    }

    #[test]
    fn test_language_preference() {
        let store = MemoryStore::new();
        assert_eq!(load_language(&store), None);

        save_language(&store, "pt-BR");
        assert_eq!(load_language(&store).as_deref(), Some("pt-BR"));

        save_language(&DisabledStore, "en");
        assert_eq!(load_language(&DisabledStore), None);
    }
}
