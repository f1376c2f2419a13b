//! The page view
//!
//! `PageShell` owns all interactive state of one mounted page. Mounting
//! renders the page into a root element, subscribes the pointer, scroll
//! and click handlers, and schedules the load transition. Dropping or
//! unmounting the shell releases every subscription.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use crate::config::PageConfig;
use crate::dom::sync::{sync_active_section, sync_menu, sync_pointer};
use crate::dom::{DomLayout, EventListener, LoadGate};
use crate::error::PortfolioError;
use crate::models::{PageState, Portfolio};
use crate::renderers::render_page;
use crate::tracking::{navigate, track_scroll, NavigationOutcome};

const NAV_TARGET_SELECTOR: &str = "[data-nav-target]";
const MENU_TOGGLE_SELECTOR: &str = "[data-menu-toggle]";

fn report(result: Result<(), PortfolioError>) {
    if let Err(err) = result {
        log::warn!("{}", err);
    }
}

pub struct PageShell {
    root: Element,
    layout: Rc<DomLayout>,
    state: Rc<RefCell<PageState>>,
    config: PageConfig,
    listeners: Vec<EventListener>,
    load_gate: Option<LoadGate>,
}

impl PageShell {
    /// Render the page into `#root_id` and start tracking events
    pub fn mount(
        root_id: &str,
        config: PageConfig,
        portfolio: &Portfolio,
    ) -> Result<Self, PortfolioError> {
        let layout = Rc::new(DomLayout::from_window()?);
        let root = layout
            .element_by_id(root_id)
            .ok_or_else(|| PortfolioError::MountPointMissing(root_id.to_string()))?;

        let state = Rc::new(RefCell::new(PageState::new()));
        let markup = render_page(portfolio, &state.borrow(), config.halo_radius)?;
        root.set_inner_html(&markup);

        let mut shell = Self {
            root,
            layout,
            state,
            config,
            listeners: Vec::with_capacity(3),
            load_gate: None,
        };
        if let Err(err) = shell.start() {
            shell.root.set_inner_html("");
            return Err(err);
        }

        log::info!("Portfolio mounted into #{}", root_id);
        Ok(shell)
    }

    fn start(&mut self) -> Result<(), PortfolioError> {
        self.subscribe()?;
        self.load_gate = Some(LoadGate::schedule(
            self.layout.window(),
            self.root.clone(),
            Rc::clone(&self.state),
        )?);
        Ok(())
    }

    fn subscribe(&mut self) -> Result<(), PortfolioError> {
        let window = self.layout.window().clone();

        let pointer = {
            let state = Rc::clone(&self.state);
            let root = self.root.clone();
            let halo_radius = self.config.halo_radius;
            EventListener::new(&window, "mousemove", move |event: Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                state
                    .borrow_mut()
                    .record_pointer(f64::from(event.client_x()), f64::from(event.client_y()));
                report(sync_pointer(&root, &state.borrow(), halo_radius));
            })?
        };

        let scroll = {
            let state = Rc::clone(&self.state);
            let root = self.root.clone();
            let layout = Rc::clone(&self.layout);
            let lookahead = self.config.scroll_lookahead;
            EventListener::new(&window, "scroll", move |_event: Event| {
                let changed = track_scroll(&mut state.borrow_mut(), &*layout, lookahead);
                if changed {
                    report(sync_active_section(&root, &state.borrow()));
                }
            })?
        };

        let click = {
            let state = Rc::clone(&self.state);
            let root = self.root.clone();
            let layout = Rc::clone(&self.layout);
            EventListener::new(&self.root, "click", move |event: Event| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                if let Ok(Some(button)) = target.closest(NAV_TARGET_SELECTOR) {
                    if let Some(id) = button.get_attribute("data-nav-target") {
                        let outcome = navigate(&mut state.borrow_mut(), &*layout, &id);
                        log::debug!("Navigation to '{}': {:?}", id, outcome);
                        report(sync_menu(&root, &state.borrow()));
                    }
                } else if let Ok(Some(_)) = target.closest(MENU_TOGGLE_SELECTOR) {
                    let open = state.borrow_mut().toggle_menu();
                    log::debug!("Mobile menu {}", if open { "opened" } else { "closed" });
                    report(sync_menu(&root, &state.borrow()));
                }
            })?
        };

        self.listeners.extend([pointer, scroll, click]);
        Ok(())
    }

    /// Scroll to a section as if its menu button had been clicked
    pub fn navigate_to(&self, id: &str) -> NavigationOutcome {
        let outcome = navigate(&mut self.state.borrow_mut(), &*self.layout, id);
        report(sync_menu(&self.root, &self.state.borrow()));
        outcome
    }

    /// Flip the mobile menu; returns the new open state
    pub fn toggle_menu(&self) -> bool {
        let open = self.state.borrow_mut().toggle_menu();
        report(sync_menu(&self.root, &self.state.borrow()));
        open
    }

    /// Snapshot of the current state
    pub fn state(&self) -> PageState {
        self.state.borrow().clone()
    }

    /// Shared handle to the live state, as seen by the event handlers
    pub fn shared_state(&self) -> Rc<RefCell<PageState>> {
        Rc::clone(&self.state)
    }

    pub fn subscription_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Release all subscriptions and clear the rendered markup
    pub fn unmount(mut self) {
        self.listeners.clear();
        self.load_gate = None;
        self.root.set_inner_html("");
        log::info!("Portfolio unmounted");
    }
}
