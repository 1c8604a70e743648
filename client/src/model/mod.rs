//! Site documents and compiled-in content.
//!
//! SYSTEM CONTEXT
//! ==============
//! `portfolio` and `settings` are the two persisted documents; `content`
//! holds copy that ships with the build and is never edited at runtime.

pub mod content;
pub mod portfolio;
pub mod settings;
