//! # island-client
//!
//! Leptos frontend for the floating-island portfolio. Renders on the server
//! (`ssr`) and hydrates in the browser (`hydrate`).
//!
//! Pages bind the platform-free `interaction` core to the DOM: pointer and
//! selection listeners feed an `InteractionCore`, the contact form drives a
//! `ContactFormModel` over browser storage, and the home page hands scene
//! rules to an external 3D renderer through `SceneController`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("hydrating island client");
    leptos::mount::hydrate_body(app::App);
}
