//! # client
//!
//! Leptos frontend for Prepify. Pages and components render the domain state
//! from the `prep` crate; `util` owns the browser glue (localStorage, clock,
//! theme attribute) and `net` owns the HTTP side of the interview backend.
//!
//! Built twice: with `ssr` for server rendering inside the axum host and with
//! `hydrate` for the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
