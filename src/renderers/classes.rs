//! Class names and inline styles driven by page state
//!
//! Used both when the page is first rendered and when the live DOM is
//! synced after a state change, so the two never disagree.

use crate::models::PointerPosition;

pub const NAV_LINK_CLASS: &str = "nav-link";
pub const NAV_LINK_ACTIVE_CLASS: &str = "nav-link--active";
pub const MOBILE_MENU_CLASS: &str = "mobile-menu";
pub const MOBILE_MENU_OPEN_CLASS: &str = "mobile-menu--open";
pub const REVEAL_CLASS: &str = "reveal";
pub const LOADED_CLASS: &str = "is-loaded";

/// Which of the two navigation menus a button belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    Desktop,
    Mobile,
}

impl NavVariant {
    fn modifier(self) -> &'static str {
        match self {
            NavVariant::Desktop => "nav-link--desktop",
            NavVariant::Mobile => "nav-link--mobile",
        }
    }
}

pub fn nav_link_class(variant: NavVariant, active: bool) -> String {
    let mut class = format!("{} {}", NAV_LINK_CLASS, variant.modifier());
    if active {
        class.push(' ');
        class.push_str(NAV_LINK_ACTIVE_CLASS);
    }
    class
}

pub fn mobile_menu_class(open: bool) -> String {
    if open {
        format!("{} {}", MOBILE_MENU_CLASS, MOBILE_MENU_OPEN_CLASS)
    } else {
        MOBILE_MENU_CLASS.to_string()
    }
}

/// Class of an element whose entrance animation waits for the load gate
pub fn reveal_class(loaded: bool) -> String {
    if loaded {
        format!("{} {}", REVEAL_CLASS, LOADED_CLASS)
    } else {
        REVEAL_CLASS.to_string()
    }
}

/// Top-left corner of the pointer halo, centred on the pointer
pub fn halo_origin(pointer: PointerPosition, radius: f64) -> (f64, f64) {
    (pointer.x - radius, pointer.y - radius)
}

pub fn halo_style(pointer: PointerPosition, radius: f64) -> String {
    let (left, top) = halo_origin(pointer, radius);
    format!("left: {}px; top: {}px;", left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_class() {
        assert_eq!(nav_link_class(NavVariant::Desktop, false), "nav-link nav-link--desktop");
        assert_eq!(
            nav_link_class(NavVariant::Mobile, true),
            "nav-link nav-link--mobile nav-link--active"
        );
    }

    #[test]
    fn test_menu_and_reveal_classes() {
        assert_eq!(mobile_menu_class(false), "mobile-menu");
        assert_eq!(mobile_menu_class(true), "mobile-menu mobile-menu--open");
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal is-loaded");
    }

    #[test]
    fn test_halo_is_centred_on_pointer() {
        let pointer = PointerPosition { x: 300.0, y: 50.0 };
        assert_eq!(halo_origin(pointer, 192.0), (108.0, -142.0));
        assert_eq!(halo_style(pointer, 192.0), "left: 108px; top: -142px;");
    }
}
