//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. Browser-only behavior is gated on
//! the `hydrate` feature with inert fallbacks for SSR and tests.

pub mod clipboard;
pub mod clock;
pub mod color;
pub mod dialog;
pub mod image_import;
pub mod scroll;
pub mod video;
