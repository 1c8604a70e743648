//! Staged edit sessions for the admin editor.
//!
//! DESIGN
//! ======
//! A session holds a complete draft copy of the entity being edited. Input
//! events only ever touch the draft; the committed document in
//! [`SiteContent`] changes exclusively through `commit`. Drafts are whole
//! entities, so committing replaces every field and can never silently drop
//! one.
//!
//! `SettingsSession` additionally tracks an epoch that advances on every
//! open and close. Image reads are asynchronous; an [`ImportTicket`] records
//! the epoch it was issued under, and a result arriving after the session
//! moved on is dropped instead of landing in a stale draft.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use crate::model::portfolio::PortfolioEntry;
use crate::model::settings::{ImageField, SiteSettings};
use crate::state::site::{CommitOutcome, ContentError, SiteContent};
use crate::store::KeyValueStore;

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("no edit in progress")]
    NotEditing,
    #[error(transparent)]
    Content(#[from] ContentError),
}

// =============================================================================
// PORTFOLIO ENTRY SESSION
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Editing {
        draft: PortfolioEntry,
        /// True when the draft came from "add new" rather than an existing entry.
        is_new: bool,
    },
}

impl EditSession {
    /// Start editing a copy of an existing entry.
    pub fn open_existing(entry: &PortfolioEntry) -> Self {
        Self::Editing { draft: entry.clone(), is_new: false }
    }

    /// Start a new entry from the placeholder template.
    pub fn open_new(id: impl Into<String>) -> Self {
        Self::Editing { draft: PortfolioEntry::template(id), is_new: true }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn draft(&self) -> Option<&PortfolioEntry> {
        match self {
            Self::Closed => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut PortfolioEntry> {
        match self {
            Self::Closed => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    /// Apply a field edit to the draft. No-op when closed.
    pub fn update_draft(&mut self, edit: impl FnOnce(&mut PortfolioEntry)) {
        if let Some(draft) = self.draft_mut() {
            edit(draft);
        }
    }

    /// Whether closing now would lose anything: new drafts always count,
    /// existing drafts only when they differ from the committed entry.
    pub fn is_dirty<S: KeyValueStore>(&self, content: &SiteContent<S>) -> bool {
        match self {
            Self::Closed => false,
            Self::Editing { is_new: true, .. } => true,
            Self::Editing { draft, is_new: false } => content.entry(&draft.id) != Some(draft),
        }
    }

    /// Promote the draft into `content` and close the session.
    ///
    /// On a store failure the session stays open with the draft intact so the
    /// admin can retry or trim the entry.
    pub fn commit<S: KeyValueStore>(&mut self, content: &mut SiteContent<S>) -> Result<CommitOutcome, EditError> {
        let draft = self.draft().cloned().ok_or(EditError::NotEditing)?;
        let outcome = content.commit_entry(draft)?;
        *self = Self::Closed;
        Ok(outcome)
    }

    /// Drop the draft without touching the committed document.
    pub fn discard(&mut self) -> Option<PortfolioEntry> {
        match std::mem::take(self) {
            Self::Closed => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }
}

// =============================================================================
// SETTINGS SESSION
// =============================================================================

/// Proof that an image read was started under a particular settings session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImportTicket {
    epoch: u64,
    pub field: ImageField,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsSession {
    draft: Option<SiteSettings>,
    epoch: u64,
}

impl SettingsSession {
    /// Seed the draft from the committed settings. Reopening invalidates any
    /// outstanding import tickets.
    pub fn open(&mut self, committed: &SiteSettings) {
        self.epoch += 1;
        self.draft = Some(committed.clone());
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&SiteSettings> {
        self.draft.as_ref()
    }

    pub fn update_draft(&mut self, edit: impl FnOnce(&mut SiteSettings)) {
        if let Some(draft) = self.draft.as_mut() {
            edit(draft);
        }
    }

    /// Empty an image slot in the draft.
    pub fn clear_image(&mut self, field: ImageField) {
        self.update_draft(|d| d.set_image(field, String::new()));
    }

    /// Issue a ticket for an image read. `None` when no session is open.
    pub fn begin_import(&self, field: ImageField) -> Option<ImportTicket> {
        self.draft.as_ref().map(|_| ImportTicket { epoch: self.epoch, field })
    }

    /// Apply a finished image read. Returns `false` and drops the data when
    /// the session that issued `ticket` is no longer the open one.
    pub fn apply_import(&mut self, ticket: ImportTicket, data_uri: String) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        match self.draft.as_mut() {
            Some(draft) => {
                draft.set_image(ticket.field, data_uri);
                true
            }
            None => false,
        }
    }

    /// Replace the committed settings with the draft and close.
    ///
    /// A failed write keeps the draft open, and outstanding import tickets
    /// stay valid.
    pub fn commit<S: KeyValueStore>(&mut self, content: &mut SiteContent<S>) -> Result<(), EditError> {
        let draft = self.draft.clone().ok_or(EditError::NotEditing)?;
        content.replace_settings(draft)?;
        self.draft = None;
        self.epoch += 1;
        Ok(())
    }

    pub fn discard(&mut self) -> Option<SiteSettings> {
        let draft = self.draft.take();
        if draft.is_some() {
            self.epoch += 1;
        }
        draft
    }
}
