//! Portfolio WASM API
//!
//! This module provides the JavaScript-facing API for the portfolio page.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization and logging
//! - `core`: Mount/unmount of the page view and the navigation entry points

pub mod helpers;
pub mod core;

pub use core::*;
