//! Browser implementations of the store's seams.

use store::{Confirm, Storage, StorageError};
use wasm_bindgen::JsValue;

/// `window.localStorage`. Looked up on every call, so a page that loses
/// access (private mode, quota policy) reports `Unavailable` instead of
/// holding a dead handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    fn handle() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

fn describe(error: JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{error:?}"))
}

impl Storage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::handle()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: describe(e),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: describe(e),
            })
    }
}

/// `window.confirm`. Answers no when there is no window to ask.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
