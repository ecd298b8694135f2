//! Hospital CMS Portal
//!
//! Browser frontend for the hospital management system built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Role-gated header and doctor cards
//! - Admin doctor directory with add and delete
//! - Doctor appointment table by day and patient name
//! - Patient directory with booking
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Rendering and page logic live in the `hospital-portal` core;
//! this crate supplies the browser session store, the `gloo-net` transport
//! and the host that mounts fragments and shows dialogs.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Core tracing events arrive through the `log` facade
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Hospital CMS portal starting");

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
