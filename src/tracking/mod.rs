//! Scroll-driven section tracking and navigation dispatch
//!
//! Both pieces are written against small traits so they can run against
//! the live DOM (`crate::dom::DomLayout`) or a fixed geometry in tests.

pub mod dispatcher;
pub mod section_tracker;

pub use dispatcher::{navigate, NavigationOutcome, ScrollHost};
pub use section_tracker::{locate_section, track_scroll, LayoutQuery, SectionExtent};
