//! `localStorage`-backed store.
//!
//! TRADE-OFFS
//! ==========
//! The storage handle is looked up on every call instead of being held,
//! which keeps `BrowserStore` a zero-sized `Send + Sync` value that fits in
//! a signal. Outside `hydrate` builds it reads nothing and accepts every
//! write, so server rendering always paints the compiled-in defaults.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use super::{KeyValueStore, StoreError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| StoreError::Read(js_error(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            // Quota errors surface here, typically from large inline images.
            local_storage()?.set_item(key, value).map_err(|e| StoreError::Write(js_error(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}
