//! Browser local storage as a [`TokenStore`]

use fiscamoto_core::{CoreError, CoreResult, TokenStore};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Plain-string view of `window.localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStore;

impl TokenStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let storage =
            local_storage().ok_or_else(|| CoreError::storage("localStorage is unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|_| CoreError::storage(format!("failed to write '{key}'")))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
