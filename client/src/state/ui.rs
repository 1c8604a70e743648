//! Local UI chrome state (menus, modals, copy acknowledgments).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the site documents so
//! rendering controls can evolve without touching persisted data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long the "copied" acknowledgment stays visible.
pub const COPY_ACK_MS: u32 = 2_000;

/// Contact field a copy acknowledgment refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Phone,
}

/// Public page chrome state, provided via context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub mobile_menu_open: bool,
    pub showreel_open: bool,
    pub contact_open: bool,
    /// Field whose value was just copied, if the acknowledgment is showing.
    pub copied: Option<ContactField>,
    /// Bumped on every copy so a stale reset timer cannot clear a newer ack.
    pub copied_seq: u64,
}

impl UiState {
    /// Record a copy and return the sequence number its reset must match.
    pub fn acknowledge_copy(&mut self, field: ContactField) -> u64 {
        self.copied_seq += 1;
        self.copied = Some(field);
        self.copied_seq
    }

    /// Clear the acknowledgment if no newer copy happened since `seq`.
    pub fn expire_copy(&mut self, seq: u64) {
        if self.copied_seq == seq {
            self.copied = None;
        }
    }

    pub fn close_modals(&mut self) {
        self.showreel_open = false;
        self.contact_open = false;
    }
}
