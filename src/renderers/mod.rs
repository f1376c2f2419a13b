//! Renderers for the portfolio page
//!
//! This module turns portfolio content and page state into markup, and
//! holds the state-dependent class names shared with the DOM sync code.

pub mod classes;
pub mod icons;
pub mod page;

pub use classes::NavVariant;
pub use icons::icon_svg;
pub use page::render_page;
