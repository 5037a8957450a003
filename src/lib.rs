//! # surat
//!
//! Leptos + WASM front-end for the incoming/outgoing mail register
//! (*surat masuk/keluar*) hosted on a spreadsheet-backed scripting platform.
//!
//! This crate contains pages, components, application state, and the remote
//! call adapter with its three transports. Record shapes and the wire rules
//! live in the `records` crate so they can be tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Install browser logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
