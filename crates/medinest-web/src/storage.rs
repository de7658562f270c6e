//! `localStorage` backend for the session flag

use medinest_core::{SessionStorage, StorageError};
use wasm_bindgen::JsValue;

/// Browser `localStorage`, looked up on every access
///
/// Holds no JS handle, so it can live inside Leptos contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable {
            reason: "no window object".to_string(),
        })?;

        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable {
                reason: describe(&e),
            })?
            .ok_or_else(|| StorageError::Unavailable {
                reason: "localStorage is disabled".to_string(),
            })
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: describe(&e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: describe(&e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Remove {
                key: key.to_string(),
                message: describe(&e),
            })
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
