//! Portfolio WASM Module
//!
//! This is the main WASM module for the single-page portfolio site.
//! It renders the page, tracks which section is scrolled into view, and
//! drives the navigation menus.

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod renderers;
pub mod shell;
pub mod tracking;

// Re-export commonly used types
pub use config::PageConfig;
pub use error::PortfolioError;
pub use models::{NavigationEntry, PageState, Portfolio, NAVIGATION};
pub use shell::PageShell;

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "Logger already initialized: {}",
            err
        )));
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Portfolio WASM module initialized");
}
