//! # client
//!
//! Leptos + WASM admin panel for the lending site: login, dashboard, and
//! the lead/testimonial/user/settings/log/report management views. Talks
//! to the host server's `/api` surface; the host forwards to the lending
//! backend with the session credential attached.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
