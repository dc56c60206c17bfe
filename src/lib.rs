//! # support-widget
//!
//! Embeddable customer-support chat widget compiled to WebAssembly.
//!
//! The crate renders a themeable floating chat window with Leptos and mounts
//! itself into a host page: a `SupportWidget` global exposes `mount` and
//! `destroy`, and a `<script>` tag carrying `data-client-key` self-mounts
//! once the document is ready. Session state, validation, theme merging, and
//! wire types live behind plain Rust APIs so they unit test natively; the
//! `browser` feature gates everything that needs a real DOM or network.

pub mod app;
pub mod components;
pub mod mount;
pub mod net;
pub mod state;
pub mod util;

/// Wasm entry point: sets up console logging, installs the global mount API,
/// and auto-mounts from the executing script tag.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    mount::install_global_api();
    mount::auto_mount();
}
