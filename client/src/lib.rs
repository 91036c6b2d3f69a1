//! # client
//!
//! Leptos frontend for the school testing app: sign-in, password reset,
//! dashboard, test authoring, school registration and API docs.
//!
//! This crate also owns the form validation schemas and wire types, which the
//! server reuses so both sides validate identically.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod schema;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
