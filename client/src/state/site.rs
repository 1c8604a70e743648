//! Reconciled site content: the session's single source of truth for the
//! portfolio collection and the site settings.
//!
//! DESIGN
//! ======
//! `SiteContent` owns both documents together with the store they mirror.
//! There are no field-level setters: callers hand in a whole replacement
//! document (or a function deriving one from the current value) and every
//! replacement is re-serialized and written through before the call returns.
//! A rejected write leaves the in-memory documents untouched.
//!
//! Loading never fails. A missing key, an unreadable store, or a malformed
//! document all degrade to the compiled-in defaults so the public page
//! always renders, whatever an admin left behind.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::collections::HashSet;

use crate::model::portfolio::{PortfolioEntry, default_portfolio};
use crate::model::settings::SiteSettings;
use crate::store::{KeyValueStore, PORTFOLIO_KEY, SETTINGS_KEY, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Which branch of the create-or-update commit rule applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Created,
    Updated,
}

#[derive(Clone, Debug)]
pub struct SiteContent<S> {
    store: S,
    portfolio: Vec<PortfolioEntry>,
    settings: SiteSettings,
}

impl<S: KeyValueStore> SiteContent<S> {
    /// Defaults only; the store is not read. Used for the server-rendered
    /// first paint before the browser copy is reconciled.
    pub fn with_defaults(store: S) -> Self {
        Self { store, portfolio: default_portfolio(), settings: SiteSettings::default() }
    }

    /// Read both documents, falling back to defaults per document.
    pub fn load(store: S) -> Self {
        let portfolio = load_portfolio(&store);
        let settings = load_settings(&store);
        Self { store, portfolio, settings }
    }

    pub fn portfolio(&self) -> &[PortfolioEntry] {
        &self.portfolio
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn entry(&self, id: &str) -> Option<&PortfolioEntry> {
        self.portfolio.iter().find(|e| e.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the whole collection and write it through.
    ///
    /// The in-memory value only changes once the store accepted the write, so
    /// on error the container still matches what a reload would show.
    pub fn replace_portfolio(&mut self, items: Vec<PortfolioEntry>) -> Result<(), ContentError> {
        let raw = serde_json::to_string(&items)?;
        self.store.set(PORTFOLIO_KEY, &raw)?;
        self.portfolio = items;
        Ok(())
    }

    pub fn update_portfolio<F>(&mut self, derive: F) -> Result<(), ContentError>
    where
        F: FnOnce(&[PortfolioEntry]) -> Vec<PortfolioEntry>,
    {
        let next = derive(&self.portfolio);
        self.replace_portfolio(next)
    }

    /// Replace the settings document wholesale and write it through.
    pub fn replace_settings(&mut self, settings: SiteSettings) -> Result<(), ContentError> {
        let raw = serde_json::to_string(&settings)?;
        self.store.set(SETTINGS_KEY, &raw)?;
        self.settings = settings;
        Ok(())
    }

    pub fn update_settings<F>(&mut self, derive: F) -> Result<(), ContentError>
    where
        F: FnOnce(&SiteSettings) -> SiteSettings,
    {
        let next = derive(&self.settings);
        self.replace_settings(next)
    }

    /// Create-or-update: an entry whose id is already present replaces that
    /// entry in place; any other entry is appended.
    pub fn commit_entry(&mut self, entry: PortfolioEntry) -> Result<CommitOutcome, ContentError> {
        let outcome = if self.entry(&entry.id).is_some() { CommitOutcome::Updated } else { CommitOutcome::Created };
        self.update_portfolio(move |items| {
            let mut next = items.to_vec();
            match next.iter_mut().find(|e| e.id == entry.id) {
                Some(slot) => *slot = entry,
                None => next.push(entry),
            }
            next
        })?;
        Ok(outcome)
    }

    /// Remove the entry with `id`. Returns `false`, without writing, when no
    /// such entry exists.
    pub fn remove_entry(&mut self, id: &str) -> Result<bool, ContentError> {
        if self.entry(id).is_none() {
            return Ok(false);
        }
        self.update_portfolio(|items| items.iter().filter(|e| e.id != id).cloned().collect())?;
        Ok(true)
    }

    /// Timestamp-derived id, bumped past any id already in the collection.
    pub fn next_entry_id(&self, now_ms: u64) -> String {
        let mut candidate = now_ms;
        while self.entry(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}

fn read_document<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("reading {key} failed, using defaults: {e}");
            None
        }
    }
}

fn load_portfolio<S: KeyValueStore>(store: &S) -> Vec<PortfolioEntry> {
    let Some(raw) = read_document(store, PORTFOLIO_KEY) else {
        return default_portfolio();
    };
    match serde_json::from_str::<Vec<PortfolioEntry>>(&raw) {
        Ok(items) => dedupe_ids(items),
        Err(e) => {
            log::warn!("stored portfolio is malformed, using defaults: {e}");
            default_portfolio()
        }
    }
}

fn load_settings<S: KeyValueStore>(store: &S) -> SiteSettings {
    let Some(raw) = read_document(store, SETTINGS_KEY) else {
        return SiteSettings::default();
    };
    SiteSettings::merge_stored(&raw).unwrap_or_else(|e| {
        log::warn!("stored settings are malformed, using defaults: {e}");
        SiteSettings::default()
    })
}

/// Keep the first entry for each id.
fn dedupe_ids(items: Vec<PortfolioEntry>) -> Vec<PortfolioEntry> {
    let mut seen = HashSet::new();
    let before = items.len();
    let kept: Vec<PortfolioEntry> = items.into_iter().filter(|e| seen.insert(e.id.clone())).collect();
    if kept.len() != before {
        log::warn!("dropped {} stored entries with duplicate ids", before - kept.len());
    }
    kept
}
