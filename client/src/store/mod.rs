//! Durable key-value storage for the site documents.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no backend; both documents live in the visitor's browser.
//! `KeyValueStore` is the seam between the state container and that storage
//! so the container can be exercised against `MemoryStore` in tests and
//! render defaults during SSR through the inert `BrowserStore`.

pub mod browser;
pub mod memory;

pub use browser::BrowserStore;
pub use memory::MemoryStore;

/// Key holding the ordered portfolio collection.
pub const PORTFOLIO_KEY: &str = "ha_young_portfolio";
/// Key holding the singleton settings document.
pub const SETTINGS_KEY: &str = "ha_young_site_settings";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String-keyed document storage.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
