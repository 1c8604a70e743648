//! Admin gate for the in-page editor.
//!
//! TRADE-OFFS
//! ==========
//! This is a cosmetic deterrent, not access control. The passcode ships in
//! the WASM bundle, the check runs in the visitor's browser, and the only
//! thing it protects is the visitor's own `localStorage`. There is no
//! expiry, token, lockout, or server verification. Real access control
//! would need a server-side component.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

/// Shared secret compared against the unlock form input.
pub const ADMIN_PASSCODE: &str = "9876";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("비밀번호가 틀렸습니다.")]
    WrongPasscode,
}

/// Page-session unlock flag. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminGate {
    unlocked: bool,
}

impl AdminGate {
    pub fn is_unlocked(self) -> bool {
        self.unlocked
    }

    /// Flip the gate open when `input` matches. A mismatch leaves the gate
    /// as it was; retries are unlimited.
    pub fn unlock(&mut self, input: &str) -> Result<(), GateError> {
        if input == ADMIN_PASSCODE {
            self.unlocked = true;
            Ok(())
        } else {
            Err(GateError::WrongPasscode)
        }
    }

    pub fn lock(&mut self) {
        self.unlocked = false;
    }
}
