//! # notes-web
//!
//! Leptos + WASM single-page client for the multi-tenant notes service.
//! Replaces the React `notesapp-frontend` with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the bearer
//! token codec/store, and the HTTP gateway used by the typed API clients.
//! Authorization is fully server-enforced: the client decodes the token
//! payload for display and route gating only and never checks signatures.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
