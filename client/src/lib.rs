//! Yoga Studio single-page app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the `yoga-studio` core with Leptos. The session store, auth flow,
//! catalogue and account use cases are created once in [`app::App`] and
//! handed to pages through context.
//!
//! DESIGN
//! ======
//! Browser-only code (entry point, timers, session observer task) sits behind
//! the `csr` feature so pure view helpers stay testable natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
