//! # jobly-client
//!
//! Leptos + WASM frontend for the Jobly job board.
//!
//! The interesting part of this crate is the client-side session core:
//! a persisted credential token, the identity claim decoded from it, and
//! the profile fetched for that identity are reconciled into one
//! authoritative [`state::session::Session`] that the UI tree observes
//! through a read-only context. Pages and components are a thin shell
//! around that core.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
