//! # plugin
//!
//! Leptos + WASM field plugin that turns a short form into a generated
//! content brief and writes it into the CMS editor's field.
//!
//! This crate contains the root component, form/UI state, the backend
//! client, and the bridge to the host editor's plugin API. Everything except
//! the Storyblok bindings and the HTTP transport is plain Rust so the
//! generate/insert flows can be exercised natively in tests.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod host;
pub mod net;
pub mod state;

/// WASM entry point: install console logging and mount the plugin UI.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
