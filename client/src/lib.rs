//! Client-rendered single-page portfolio site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The crate compiles to WASM under the `csr` feature and mounts [`app::App`]
//! onto the document body. Native builds keep every state machine and
//! validator available for unit tests; browser glue degrades to no-ops.
//!
//! LAYOUT
//! ======
//! - `state`: theme resolution, navigation, reveal, contact form, filters.
//! - `util`: storage, presentation surface, media queries, DOM helpers.
//! - `net`: contact submission.
//! - `components`: the page sections rendered by `App`.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
