//! Navigation dispatch
//!
//! Turns a navigation selection (menu button or call-to-action) into a
//! smooth scroll request and closes the mobile menu.

use serde::Serialize;

use crate::models::PageState;

/// Scroll capability of the host document
pub trait ScrollHost {
    /// Smoothly scroll the section with `id` to the top of the viewport.
    ///
    /// Returns false when no element with that id exists.
    fn smooth_scroll_to(&self, id: &str) -> bool;
}

/// What a navigation request did
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// A scroll to the target was requested
    Scrolled,
    /// The target was not found; nothing was scrolled
    TargetMissing,
}

/// Scroll to `target` and close the menu.
///
/// The menu is closed whether or not the target exists.
pub fn navigate<H: ScrollHost + ?Sized>(
    state: &mut PageState,
    host: &H,
    target: &str,
) -> NavigationOutcome {
    let outcome = if host.smooth_scroll_to(target) {
        NavigationOutcome::Scrolled
    } else {
        log::debug!("Navigation target '{}' not found, ignoring", target);
        NavigationOutcome::TargetMissing
    };
    state.close_menu();
    outcome
}
