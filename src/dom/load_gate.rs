//! One-shot load transition
//!
//! Sets the loaded flag on the first animation frame after mount, which
//! lets the entrance-animation classes engage. Dropping the gate before
//! the frame fires cancels it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use super::sync::sync_loaded;
use crate::error::PortfolioError;
use crate::models::PageState;

pub struct LoadGate {
    window: Window,
    handle: i32,
    state: Rc<RefCell<PageState>>,
    _callback: Closure<dyn FnMut()>,
}

impl LoadGate {
    /// Request the frame that flips the loaded flag
    pub fn schedule(
        window: &Window,
        root: Element,
        state: Rc<RefCell<PageState>>,
    ) -> Result<Self, PortfolioError> {
        let gate_state = Rc::clone(&state);
        let callback = Closure::wrap(Box::new(move || {
            let transitioned = gate_state.borrow_mut().mark_loaded();
            if transitioned {
                log::debug!("Page loaded, entrance transitions enabled");
                if let Err(err) = sync_loaded(&root, &gate_state.borrow()) {
                    log::warn!("{}", err);
                }
            }
        }) as Box<dyn FnMut()>);

        let handle = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(PortfolioError::dom("requestAnimationFrame"))?;

        Ok(Self {
            window: window.clone(),
            handle,
            state,
            _callback: callback,
        })
    }

    pub fn has_fired(&self) -> bool {
        self.state.try_borrow().map(|state| state.is_loaded()).unwrap_or(false)
    }
}

impl Drop for LoadGate {
    fn drop(&mut self) {
        if !self.has_fired() {
            if let Err(err) = self.window.cancel_animation_frame(self.handle) {
                log::warn!("Failed to cancel load frame: {:?}", err);
            }
        }
    }
}
