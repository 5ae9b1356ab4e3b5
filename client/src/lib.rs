//! # client
//!
//! Leptos + WASM admin UI for the asset management backend.
//!
//! Pages keep their state in `inventory` page models and only wire browser
//! events, HTTP calls, and rendering around them. `net::api::HttpApi` is the
//! browser implementation of `inventory::AssetApi`.
#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
