pub mod common;
pub mod content;
pub mod frontend;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

/// WASM entry point
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(frontend::App);
}
