//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `site` owns the persisted documents, `edit`
//! stages admin drafts on top of them, `admin` gates the editor, and `ui`
//! holds throwaway page chrome.

pub mod admin;
pub mod edit;
pub mod site;
pub mod ui;

use crate::store::BrowserStore;

/// The container as provided to components.
pub type BrowserContent = site::SiteContent<BrowserStore>;
