//! # dashboard
//!
//! Leptos + WASM inventory dashboard: simulated role login, then per-role
//! cards that each load one collection from the inventory API.
//!
//! Logic lives in `state` as plain structs tested natively; `components` and
//! `pages` wire those structs to the DOM, and `net` performs the fetches when
//! built with the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
