//! Browser Storage
//!
//! `localStorage` behind the core `KeyValueStore` seam. A missing or
//! disabled storage surfaces as an error that the core accessors swallow.

use landing_core::{
    error::{LandingError, Result},
    storage::{ChatDetails, KeyValueStore},
};
use wasm_bindgen::JsValue;

/// `window.localStorage`, if the browser grants it
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    fn inner(&self) -> Result<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| LandingError::Storage("localStorage unavailable".into()))
    }
}

fn js_error(err: JsValue) -> LandingError {
    LandingError::Storage(format!("{err:?}"))
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.inner()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.inner()?.remove_item(key).map_err(js_error)
    }
}

/// Per-chat details in `localStorage`
pub fn chat_details() -> ChatDetails<BrowserStorage> {
    ChatDetails::new(BrowserStorage::local())
}
