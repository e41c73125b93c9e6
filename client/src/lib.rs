//! # casegrid-client
//!
//! Leptos + WASM frontend for the case list. Renders a navigation bar and
//! three routes; the cases route shows a filterable, sortable, paginated
//! grid over static sample data.
//!
//! The grid engine (`grid`) is plain Rust with no DOM access; components
//! configure it and render its output.

pub mod app;
pub mod components;
pub mod grid;
pub mod pages;
pub mod services;
pub mod state;
pub mod types;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating casegrid");
    leptos::mount::hydrate_body(app::App);
}
