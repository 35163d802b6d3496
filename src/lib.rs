//! # repairbuddy
//!
//! Leptos + WASM frontend for the RepairBuddy electronics-repair shop.
//! Customers register, log in, submit repair requests and track their
//! status; administrators manage the service catalog and move repairs
//! through their lifecycle.
//!
//! This crate contains pages, components, application state (including the
//! session/auth controller and route guard), and the REST client layer that
//! talks to the backend API. All browser-only code is gated behind the
//! `hydrate` feature; native builds fall back to in-memory stubs so the
//! session machinery stays unit-testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the generated JS shim.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
