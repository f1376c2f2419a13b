//! Page view state
//!
//! This module contains the PageState struct which holds every piece of
//! interactive state of the page view: the active section, the mobile
//! menu flag, the last pointer position and the one-shot loaded flag.
//!
//! The state is owned by a single mounted view and dropped with it.

use serde::Serialize;

use super::navigation::{find_entry, initial_section};

/// Last observed pointer location in client coordinates
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Interactive state of one mounted page view
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PageState {
    /// Id of the section currently scrolled into view; always a navigation entry id
    active_section: &'static str,

    /// Whether the mobile navigation panel is open
    menu_open: bool,

    /// Drives the decorative pointer halo only
    pointer: PointerPosition,

    /// Flips to true once after mount, never back
    loaded: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            active_section: initial_section(),
            menu_open: false,
            pointer: PointerPosition::default(),
            loaded: false,
        }
    }

    pub fn active_section(&self) -> &'static str {
        self.active_section
    }

    /// Make `id` the active section.
    ///
    /// Returns true if the active section changed. Ids that are not in the
    /// navigation table are ignored.
    pub fn set_active_section(&mut self, id: &str) -> bool {
        match find_entry(id) {
            Some(entry) if entry.id != self.active_section => {
                self.active_section = entry.id;
                true
            }
            _ => false,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Flip the mobile menu and return the new value
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    pub fn record_pointer(&mut self, x: f64, y: f64) {
        self.pointer = PointerPosition { x, y };
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Set the loaded flag. Returns true only on the false -> true transition.
    pub fn mark_loaded(&mut self) -> bool {
        let transitioned = !self.loaded;
        self.loaded = true;
        transitioned
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
