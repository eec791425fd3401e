//! Landing page frontend
//!
//! Leptos-based WASM frontend: static marketing sections plus a pricing
//! section fed by the public plans API.

mod api;
mod app;
mod components;
mod i18n;
mod pages;
mod sections;
mod storage;

pub use app::App;
pub use storage::{chat_details, BrowserStorage};

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
