//! # jobportal-web
//!
//! Leptos + WASM browser client for the job portal. Rendered client-side
//! (`csr` feature, built with trunk).
//!
//! The session, gateway, and API calls all live in the `jobportal` core;
//! this crate supplies the browser adapters (`localStorage`,
//! `window.location`, `fetch`) and the pages that consume them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::mount_to_body(app::App);
}
