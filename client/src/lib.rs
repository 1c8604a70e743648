//! # showreel-client
//!
//! Leptos frontend for a motion-graphics portfolio site with a local-only
//! admin editor.
//!
//! The site content (portfolio entries and site settings) lives in browser
//! `localStorage`. `state::site::SiteContent` is the single owner of those
//! documents; admin edits are staged in `state::edit` sessions and only reach
//! storage on an explicit save.

pub mod app;
pub mod components;
pub mod model;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
