//! Page lifecycle and navigation API
//!
//! The mounted view lives in thread-local storage: WASM runs on the UI
//! thread and the view's event closures are not `Send`.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, optional, serialize};
use crate::config::{PageConfig, DEFAULT_HALO_RADIUS};
use crate::error::PortfolioError;
use crate::models::content::portfolio;
use crate::models::{PageState, NAVIGATION};
use crate::renderers::render_page;
use crate::shell::PageShell;
use crate::tracking::NavigationOutcome;
use crate::{wasm_info, wasm_log, wasm_warn};

thread_local! {
    static SHELL: RefCell<Option<PageShell>> = RefCell::new(None);
}

fn with_shell<R>(f: impl FnOnce(&PageShell) -> R) -> Result<R, JsValue> {
    SHELL.with(|slot| match slot.borrow().as_ref() {
        Some(shell) => Ok(f(shell)),
        None => Err(PortfolioError::NotMounted.into()),
    })
}

/// Render the page into the element with id `root_id` and start tracking
///
/// # Parameters
/// - `root_id`: id of the mount element
/// - `config`: optional `PageConfig` object; missing fields use defaults
#[wasm_bindgen(js_name = mountPortfolio)]
pub fn mount_portfolio(root_id: &str, config: JsValue) -> Result<(), JsValue> {
    wasm_info!("mountPortfolio called: root={}", root_id);

    let config: PageConfig = match optional(config) {
        Some(value) => deserialize(value, "Invalid page configuration")?,
        None => PageConfig::default(),
    };
    config.validate()?;
    wasm_log!("  Config: {:?}", config);

    SHELL.with(|slot| -> Result<(), JsValue> {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            wasm_warn!("mountPortfolio called while already mounted");
            return Err(PortfolioError::AlreadyMounted.into());
        }
        let shell = PageShell::mount(root_id, config.clone(), portfolio()?)?;
        // The log level only changes once a page is actually live
        config.apply_log_level()?;
        *slot = Some(shell);
        Ok(())
    })
}

/// Unsubscribe all handlers and clear the page markup
#[wasm_bindgen(js_name = unmountPortfolio)]
pub fn unmount_portfolio() -> Result<(), JsValue> {
    let shell = SHELL
        .with(|slot| slot.borrow_mut().take())
        .ok_or(PortfolioError::NotMounted)?;
    shell.unmount();
    Ok(())
}

/// Scroll to a section and close the mobile menu
///
/// Returns true if the section exists. Unknown ids are a silent no-op
/// apart from closing the menu.
#[wasm_bindgen(js_name = navigateTo)]
pub fn navigate_to(section_id: &str) -> Result<bool, JsValue> {
    wasm_info!("navigateTo called: {}", section_id);
    let outcome = with_shell(|shell| shell.navigate_to(section_id))?;
    Ok(outcome == NavigationOutcome::Scrolled)
}

/// Flip the mobile menu; returns the new open state
#[wasm_bindgen(js_name = toggleMenu)]
pub fn toggle_menu() -> Result<bool, JsValue> {
    with_shell(|shell| shell.toggle_menu())
}

/// Current page state: `{ active_section, menu_open, pointer: {x, y}, loaded }`
#[wasm_bindgen(js_name = getPageState)]
pub fn get_page_state() -> Result<JsValue, JsValue> {
    let state = with_shell(|shell| shell.state())?;
    serialize(&state, "Failed to serialize page state")
}

/// The navigation entries in declared order, as `{ id, label, icon }` objects
#[wasm_bindgen(js_name = getNavigation)]
pub fn get_navigation() -> Result<js_sys::Array, JsValue> {
    let entries = js_sys::Array::new();
    for entry in NAVIGATION.iter() {
        entries.push(&serialize(entry, "Failed to serialize navigation entry")?);
    }
    Ok(entries)
}

/// Markup of the page in its initial state, without mounting
#[wasm_bindgen(js_name = renderPortfolioHtml)]
pub fn render_portfolio_html() -> Result<String, JsValue> {
    let html = render_page(portfolio()?, &PageState::new(), DEFAULT_HALO_RADIUS)?;
    wasm_log!("renderPortfolioHtml produced {} bytes", html.len());
    Ok(html)
}
