//! RAII wrapper around `addEventListener`/`removeEventListener`.
//!
//! Window-scoped listeners outlive the element they serve, so registration
//! and removal must stay symmetric across component teardown. Holding each
//! listener in a guard that unregisters on `Drop` ties its lifetime to the
//! mount effect's cleanup closure.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{AddEventListenerOptions, EventTarget};

/// A live event listener. Dropping it removes the listener from its target.
pub struct EventSubscription<E: FromWasmAbi + 'static> {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(E)>,
}

impl<E: FromWasmAbi + 'static> EventSubscription<E> {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok();
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }

    /// Register with explicit listener options, e.g. `passive: false` for
    /// touch-move so `preventDefault` stays honored.
    pub fn with_options(
        target: &EventTarget,
        event: &'static str,
        options: &AddEventListenerOptions,
        handler: impl FnMut(E) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                options,
            )
            .ok();
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl<E: FromWasmAbi + 'static> Drop for EventSubscription<E> {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
