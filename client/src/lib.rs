//! # tastebud-client
//!
//! Leptos + WASM storefront chrome for the Tastebud food-ordering app:
//! navigation bar, admin and customer sidebars, footer and page layout.
//!
//! Identity, cart and theme state are owned elsewhere and reach the chrome
//! through the provider traits in [`providers`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod providers;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
