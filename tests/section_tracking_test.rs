// Scroll tracking and navigation dispatch against a fixed page geometry

use std::cell::RefCell;
use std::collections::HashMap;

use portfolio_wasm::models::PageState;
use portfolio_wasm::tracking::{
    navigate, track_scroll, LayoutQuery, NavigationOutcome, ScrollHost, SectionExtent,
};

const LOOKAHEAD: f64 = 100.0;

/// A page with fixed section geometry and a movable viewport
struct FakePage {
    scroll: f64,
    sections: HashMap<&'static str, SectionExtent>,
    scroll_requests: RefCell<Vec<String>>,
}

impl FakePage {
    fn new(sections: &[(&'static str, f64, f64)]) -> Self {
        Self {
            scroll: 0.0,
            sections: sections
                .iter()
                .map(|&(id, top, height)| (id, SectionExtent::new(top, height)))
                .collect(),
            scroll_requests: RefCell::new(Vec::new()),
        }
    }

    /// All eight sections stacked, 800 units each
    fn full() -> Self {
        Self::new(&[
            ("home", 0.0, 800.0),
            ("about", 800.0, 800.0),
            ("education", 1600.0, 800.0),
            ("skills", 2400.0, 800.0),
            ("projects", 3200.0, 800.0),
            ("internships", 4000.0, 800.0),
            ("achievements", 4800.0, 800.0),
            ("contact", 5600.0, 800.0),
        ])
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll = offset;
    }
}

impl LayoutQuery for FakePage {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn section_extent(&self, id: &str) -> Option<SectionExtent> {
        self.sections.get(id).copied()
    }
}

impl ScrollHost for FakePage {
    fn smooth_scroll_to(&self, id: &str) -> bool {
        self.scroll_requests.borrow_mut().push(id.to_string());
        self.sections.contains_key(id)
    }
}

#[test]
fn test_same_offset_yields_same_section() {
    let mut page = FakePage::full();
    for offset in [0.0, 650.0, 1499.0, 1500.0, 3333.0, 5999.0] {
        page.scroll_to(offset);
        let mut first = PageState::new();
        let mut second = PageState::new();
        track_scroll(&mut first, &page, LOOKAHEAD);
        track_scroll(&mut second, &page, LOOKAHEAD);
        assert_eq!(first.active_section(), second.active_section(), "offset {}", offset);
    }
}

#[test]
fn test_boundary_belongs_to_next_section() {
    // about [800, 1600), skills [1600, 2400); education is not in the document
    let mut page = FakePage::new(&[("about", 800.0, 800.0), ("skills", 1600.0, 800.0)]);
    let mut state = PageState::new();

    page.scroll_to(1500.0);
    assert!(track_scroll(&mut state, &page, LOOKAHEAD));
    assert_eq!(state.active_section(), "skills");

    page.scroll_to(1499.0);
    track_scroll(&mut state, &page, LOOKAHEAD);
    assert_eq!(state.active_section(), "about");
}

#[test]
fn test_reference_above_all_sections_keeps_home() {
    let mut page = FakePage::new(&[("home", 0.0, 800.0), ("about", 800.0, 800.0)]);
    let mut state = PageState::new();

    page.scroll_to(-250.0);
    assert!(!track_scroll(&mut state, &page, LOOKAHEAD));
    assert_eq!(state.active_section(), "home");
}

#[test]
fn test_past_last_section_keeps_previous() {
    let mut page = FakePage::full();
    let mut state = PageState::new();

    page.scroll_to(5700.0);
    track_scroll(&mut state, &page, LOOKAHEAD);
    assert_eq!(state.active_section(), "contact");

    page.scroll_to(9000.0);
    assert!(!track_scroll(&mut state, &page, LOOKAHEAD));
    assert_eq!(state.active_section(), "contact");
}

#[test]
fn test_fast_scroll_may_skip_sections() {
    let mut page = FakePage::full();
    let mut state = PageState::new();

    // One sample in home, the next already in projects
    page.scroll_to(100.0);
    track_scroll(&mut state, &page, LOOKAHEAD);
    page.scroll_to(3300.0);
    track_scroll(&mut state, &page, LOOKAHEAD);
    assert_eq!(state.active_section(), "projects");
}

#[test]
fn test_contact_click_scrolls_and_closes_menu() {
    let page = FakePage::full();
    let mut state = PageState::new();
    state.toggle_menu();

    let outcome = navigate(&mut state, &page, "contact");

    assert_eq!(outcome, NavigationOutcome::Scrolled);
    assert_eq!(*page.scroll_requests.borrow(), vec!["contact".to_string()]);
    assert!(!state.is_menu_open());
}

#[test]
fn test_any_navigation_closes_open_menu() {
    let page = FakePage::new(&[("home", 0.0, 800.0)]);
    for target in ["home", "about", "nowhere"] {
        let mut state = PageState::new();
        state.toggle_menu();
        navigate(&mut state, &page, target);
        assert!(!state.is_menu_open(), "menu left open after navigating to {}", target);
    }
}

#[test]
fn test_navigation_then_scroll_updates_active_section() {
    let mut page = FakePage::full();
    let mut state = PageState::new();

    navigate(&mut state, &page, "skills");
    assert_eq!(state.active_section(), "home");

    // The smooth scroll lands the section at the top of the viewport
    page.scroll_to(2400.0);
    track_scroll(&mut state, &page, LOOKAHEAD);
    assert_eq!(state.active_section(), "skills");
}
