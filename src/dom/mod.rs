//! Browser bindings
//!
//! web-sys implementations of the tracking traits, event subscriptions
//! that unsubscribe on drop, the one-shot load gate, and the functions
//! that push page state into the live DOM.

pub mod layout;
pub mod listener;
pub mod load_gate;
pub mod sync;

pub use layout::DomLayout;
pub use listener::EventListener;
pub use load_gate::LoadGate;
