//! # client
//!
//! Leptos + WASM frontend for the Sitesmith template editor.
//!
//! This crate contains the editor page, its components, UI state enums, the
//! REST client for the generation endpoint, and the browser glue (storage,
//! clipboard, downloads, theme application). The document model itself lives
//! in the `template` crate so the server and CLI share it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
