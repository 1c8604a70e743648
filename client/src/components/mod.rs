//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the public sections and the admin editors while
//! reading/writing shared state from Leptos context providers.

pub mod about;
pub mod contact;
pub mod entry_editor;
pub mod hero;
pub mod navbar;
pub mod portfolio_card;
pub mod process_steps;
pub mod settings_editor;
pub mod showreel_modal;
pub mod video_frame;
