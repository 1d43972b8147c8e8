// lib.rs - Root module for the estate_ease library
//
// The same crate builds the server binary (feature "ssr") and the
// browser bundle (feature "hydrate"). Listing logic, data and config
// compile without either feature so they can be tested on their own.

#![recursion_limit = "512"]

pub mod config;
pub mod error;

/// Known listing sets for tests
pub mod fixtures;

pub mod web_app;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
