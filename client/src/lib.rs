//! # client
//!
//! Leptos + WASM frontend for LegalCloud Advisor.
//!
//! ARCHITECTURE
//! ============
//! - `state::session`: the session store, the single source of truth for
//!   who is signed in and with which role.
//! - `util::guard`: pure route-guard decisions and the route access table.
//! - `net::identity`: identity provider client and its subscription guard.
//! - `pages` / `components`: role-aware screens over fixture data.
//!
//! The same crate is compiled twice: with `ssr` into the host server, and
//! with `hydrate` into the browser bundle that takes over the SSR markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
