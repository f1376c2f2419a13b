//! Section-activation tracking
//!
//! On every scroll the tracker samples a reference point (scroll offset
//! plus a fixed lookahead) and picks the first section, in navigation
//! order, whose vertical range `[top, top + height)` contains it.
//! When nothing contains the point the active section is left as is.

use crate::models::{NavigationEntry, PageState, NAVIGATION};

/// Vertical extent of a section element in document coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: the top edge belongs to the section, the bottom edge does not
    pub fn contains(&self, point: f64) -> bool {
        point >= self.top && point < self.bottom()
    }
}

/// Read access to the page geometry
pub trait LayoutQuery {
    /// Current vertical scroll offset of the viewport
    fn scroll_offset(&self) -> f64;

    /// Extent of the section with the given id, or None if it is not in the document
    fn section_extent(&self, id: &str) -> Option<SectionExtent>;
}

/// First entry in `entries` whose section contains `reference`.
///
/// Entries whose section is missing from the layout are skipped.
pub fn locate_section<L: LayoutQuery + ?Sized>(
    entries: &[NavigationEntry],
    layout: &L,
    reference: f64,
) -> Option<&'static str> {
    entries
        .iter()
        .find(|entry| {
            layout
                .section_extent(entry.id)
                .map_or(false, |extent| extent.contains(reference))
        })
        .map(|entry| entry.id)
}

/// Recompute the active section for the current scroll offset.
///
/// Returns true if the active section changed.
pub fn track_scroll<L: LayoutQuery + ?Sized>(
    state: &mut PageState,
    layout: &L,
    lookahead: f64,
) -> bool {
    let reference = layout.scroll_offset() + lookahead;
    match locate_section(&NAVIGATION, layout, reference) {
        Some(id) => {
            let changed = state.set_active_section(id);
            if changed {
                log::debug!("Active section -> {} (reference point {})", id, reference);
            }
            changed
        }
        None => {
            log::trace!("No section contains reference point {}", reference);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedLayout {
        scroll: f64,
        extents: HashMap<&'static str, SectionExtent>,
    }

    impl FixedLayout {
        fn new(sections: &[(&'static str, f64, f64)]) -> Self {
            Self {
                scroll: 0.0,
                extents: sections
                    .iter()
                    .map(|&(id, top, height)| (id, SectionExtent::new(top, height)))
                    .collect(),
            }
        }
    }

    impl LayoutQuery for FixedLayout {
        fn scroll_offset(&self) -> f64 {
            self.scroll
        }

        fn section_extent(&self, id: &str) -> Option<SectionExtent> {
            self.extents.get(id).copied()
        }
    }

    #[test]
    fn test_extent_is_half_open() {
        let extent = SectionExtent::new(800.0, 800.0);
        assert!(extent.contains(800.0));
        assert!(extent.contains(1599.9));
        assert!(!extent.contains(1600.0));
        assert!(!extent.contains(799.9));
    }

    #[test]
    fn test_locate_skips_missing_sections() {
        let layout = FixedLayout::new(&[("about", 800.0, 800.0), ("skills", 1600.0, 800.0)]);
        assert_eq!(locate_section(&NAVIGATION, &layout, 1000.0), Some("about"));
        assert_eq!(locate_section(&NAVIGATION, &layout, 1600.0), Some("skills"));
        assert_eq!(locate_section(&NAVIGATION, &layout, 100.0), None);
    }

    #[test]
    fn test_overlapping_sections_resolve_in_declared_order() {
        // contact overlaps projects entirely; projects is declared first
        let layout = FixedLayout::new(&[("projects", 0.0, 1000.0), ("contact", 0.0, 1000.0)]);
        assert_eq!(locate_section(&NAVIGATION, &layout, 500.0), Some("projects"));
    }

    #[test]
    fn test_track_scroll_applies_lookahead() {
        let mut layout = FixedLayout::new(&[("home", 0.0, 800.0), ("about", 800.0, 800.0)]);
        let mut state = PageState::new();

        layout.scroll = 699.0;
        assert!(!track_scroll(&mut state, &layout, 100.0));
        assert_eq!(state.active_section(), "home");

        layout.scroll = 700.0;
        assert!(track_scroll(&mut state, &layout, 100.0));
        assert_eq!(state.active_section(), "about");
    }

    #[test]
    fn test_track_scroll_keeps_previous_when_unmatched() {
        let mut layout = FixedLayout::new(&[("about", 800.0, 800.0)]);
        let mut state = PageState::new();
        state.set_active_section("about");

        layout.scroll = 5000.0;
        assert!(!track_scroll(&mut state, &layout, 100.0));
        assert_eq!(state.active_section(), "about");
    }
}
