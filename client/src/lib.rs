//! # client
//!
//! Leptos + WASM frontend for the CloudMigrate dashboard.
//!
//! Pages fetch migrations, discovered resources, and cost estimates from the
//! REST backend and render them as cards and tables. Each page owns its own
//! state; there is no cache and no state shared between routes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
