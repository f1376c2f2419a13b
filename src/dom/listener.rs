//! Event subscriptions
//!
//! An `EventListener` owns the JS closure registered with
//! `addEventListener` and removes it when dropped, so a handler can never
//! run against a view that has been torn down.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::error::PortfolioError;

pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Subscribe `handler` to `event_type` events on `target`
    pub fn new<F>(
        target: &EventTarget,
        event_type: &'static str,
        handler: F,
    ) -> Result<Self, PortfolioError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(PortfolioError::dom("addEventListener"))?;
        log::debug!("Subscribed to '{}' events", event_type);

        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let removed = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
        match removed {
            Ok(()) => log::debug!("Unsubscribed from '{}' events", self.event_type),
            Err(err) => log::warn!("Failed to unsubscribe from '{}': {:?}", self.event_type, err),
        }
    }
}
