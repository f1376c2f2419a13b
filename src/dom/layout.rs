//! DOM-backed page geometry and scrolling

use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::error::PortfolioError;
use crate::tracking::{LayoutQuery, ScrollHost, SectionExtent};

/// Window and document handles used to measure and scroll sections
#[derive(Clone, Debug)]
pub struct DomLayout {
    window: Window,
    document: Document,
}

impl DomLayout {
    /// Bind to the global window. Fails outside a browser.
    pub fn from_window() -> Result<Self, PortfolioError> {
        let window = web_sys::window().ok_or(PortfolioError::Environment("window"))?;
        let document = window.document().ok_or(PortfolioError::Environment("document"))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl LayoutQuery for DomLayout {
    fn scroll_offset(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(offset) => offset,
            Err(err) => {
                log::warn!("scrollY unavailable: {:?}", err);
                0.0
            }
        }
    }

    /// Extent in document coordinates, independent of the offset parent
    fn section_extent(&self, id: &str) -> Option<SectionExtent> {
        let rect = self.element_by_id(id)?.get_bounding_client_rect();
        Some(SectionExtent::new(rect.top() + self.scroll_offset(), rect.height()))
    }
}

impl ScrollHost for DomLayout {
    fn smooth_scroll_to(&self, id: &str) -> bool {
        let Some(section) = self.element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
