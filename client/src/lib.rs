//! # client
//!
//! Leptos + WASM single-page application for the Marito terminology
//! platform: feedback submission and triage, user settings, learning paths,
//! term discussions, and profile management.
//!
//! Pages talk to the backend through the thin service wrappers in `net`.
//! Writes that fail for connectivity reasons are parked in the local
//! `offline` queue and replayed once the browser is back online.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod offline;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
