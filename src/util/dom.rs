//! DOM lookup and event wiring shared by the page components.
//!
//! The page markup is static and outlives every binding, so listeners are
//! registered once and their closures are leaked with `Closure::forget`.
//! Key classification stays browser-independent so handlers can be tested.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, KeyboardEvent};

/// Keys that activate a focused control the same way a click does.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[must_use]
pub fn is_escape_key(key: &str) -> bool {
    key == "Escape"
}

#[cfg(feature = "hydrate")]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it to the expected element type.
#[cfg(feature = "hydrate")]
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// The `key` of a keyboard event, `None` for other event types.
#[cfg(feature = "hydrate")]
pub fn event_key(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
#[cfg(feature = "hydrate")]
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach {event} listener");
    }
    cb.forget();
}

/// Like [`listen`], but registers the listener as passive.
#[cfg(feature = "hydrate")]
pub fn listen_passive(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            cb.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        log::warn!("failed to attach passive {event} listener");
    }
    cb.forget();
}
