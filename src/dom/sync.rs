//! Push page state into the live DOM
//!
//! The page is rendered once on mount; after that only the attributes and
//! classes that depend on state are touched.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::error::PortfolioError;
use crate::models::PageState;
use crate::renderers::classes::{
    halo_origin, LOADED_CLASS, MOBILE_MENU_OPEN_CLASS, NAV_LINK_ACTIVE_CLASS,
};

fn for_each_match<F>(root: &Element, selector: &str, mut apply: F) -> Result<(), PortfolioError>
where
    F: FnMut(&Element) -> Result<(), PortfolioError>,
{
    let nodes = root
        .query_selector_all(selector)
        .map_err(PortfolioError::dom("querySelectorAll"))?;
    for index in 0..nodes.length() {
        if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            apply(&element)?;
        }
    }
    Ok(())
}

fn toggle_class(element: &Element, class: &str, on: bool) -> Result<(), PortfolioError> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(PortfolioError::dom("classList.toggle"))
}

fn toggle_hidden(element: &Element, hidden: bool) -> Result<(), PortfolioError> {
    element
        .toggle_attribute_with_force("hidden", hidden)
        .map(|_| ())
        .map_err(PortfolioError::dom("toggleAttribute"))
}

/// Highlight the active section's button in both menus
pub fn sync_active_section(root: &Element, state: &PageState) -> Result<(), PortfolioError> {
    let active_id = state.active_section();
    for_each_match(root, "[data-nav-item]", |item| {
        let active = item.get_attribute("data-nav-target").as_deref() == Some(active_id);
        toggle_class(item, NAV_LINK_ACTIVE_CLASS, active)?;
        let updated = if active {
            item.set_attribute("aria-current", "true")
        } else {
            item.remove_attribute("aria-current")
        };
        updated.map_err(PortfolioError::dom("aria-current"))
    })
}

/// Show or hide the mobile panel and swap the toggle icon
pub fn sync_menu(root: &Element, state: &PageState) -> Result<(), PortfolioError> {
    let open = state.is_menu_open();
    for_each_match(root, "[data-mobile-menu]", |panel| {
        toggle_class(panel, MOBILE_MENU_OPEN_CLASS, open)?;
        toggle_hidden(panel, !open)
    })?;
    for_each_match(root, "[data-menu-toggle]", |button| {
        button
            .set_attribute("aria-expanded", if open { "true" } else { "false" })
            .map_err(PortfolioError::dom("aria-expanded"))
    })?;
    for_each_match(root, "[data-menu-icon]", |icon| {
        let is_open_icon = icon.get_attribute("data-menu-icon").as_deref() == Some("open");
        toggle_hidden(icon, is_open_icon == open)
    })
}

/// Move the decorative halo under the pointer
pub fn sync_pointer(
    root: &Element,
    state: &PageState,
    halo_radius: f64,
) -> Result<(), PortfolioError> {
    let (left, top) = halo_origin(state.pointer(), halo_radius);
    for_each_match(root, "[data-pointer-halo]", |halo| {
        let Some(halo) = halo.dyn_ref::<HtmlElement>() else {
            return Ok(());
        };
        let style = halo.style();
        style
            .set_property("left", &format!("{}px", left))
            .and_then(|_| style.set_property("top", &format!("{}px", top)))
            .map_err(PortfolioError::dom("halo style"))
    })
}

/// Engage the entrance transitions once loaded
pub fn sync_loaded(root: &Element, state: &PageState) -> Result<(), PortfolioError> {
    let loaded = state.is_loaded();
    for_each_match(root, "[data-load-gate]", |element| toggle_class(element, LOADED_CLASS, loaded))
}
