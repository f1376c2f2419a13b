//! Models for the portfolio page
//!
//! This module contains the fixed navigation table, the per-view
//! interactive state, and the display content model.

pub mod content;
pub mod navigation;
pub mod page_state;

// Re-export commonly used types
pub use content::*;
pub use navigation::{Icon, NavigationEntry, NAVIGATION};
pub use page_state::{PageState, PointerPosition};
