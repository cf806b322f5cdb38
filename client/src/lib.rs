//! # crm-client
//!
//! Leptos + WASM frontend for the CRM dashboard mockup.
//!
//! This crate contains the app root, pages, shared components and the plain
//! state models behind them. All records are seeded in memory; nothing is
//! fetched or persisted beyond the theme preference.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger already set: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
