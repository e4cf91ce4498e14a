//! Topic modal: clicking a `.topic` tile opens a dialog titled with that
//! topic; close buttons, a backdrop click or Escape dismiss it.
//!
//! Opening shows the backdrop at once and applies the `show` class on the
//! next animation frame so the entry transition has a start state. Closing
//! removes `show` at once and hides the backdrop after
//! [`MODAL_HIDE_DELAY_MS`](crate::consts::MODAL_HIDE_DELAY_MS).

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Document, EventTarget, HtmlElement};

#[cfg(feature = "hydrate")]
use crate::consts::{
    MODAL_BACKDROP_ID, MODAL_CLOSE_IDS, MODAL_DIALOG_ID, MODAL_HIDE_DELAY_MS, MODAL_PRIMARY_ACTION_ID,
    MODAL_SHOWN_CLASS, MODAL_TOPIC_ID, TOPIC_SELECTOR,
};
#[cfg(feature = "hydrate")]
use crate::state::modal::{CloseTrigger, ModalCore, topic_label};
#[cfg(feature = "hydrate")]
use crate::util::dom::{element_by_id, event_key, is_activation_key, is_escape_key, listen};

#[cfg(feature = "hydrate")]
struct ModalView {
    backdrop: HtmlElement,
    dialog: Option<HtmlElement>,
    title: Option<HtmlElement>,
    primary: Option<HtmlElement>,
    core: RefCell<ModalCore>,
    hide_timer: RefCell<Option<Timeout>>,
}

#[cfg(feature = "hydrate")]
impl ModalView {
    fn open(self: &Rc<Self>, topic: String) {
        // Cancel a hide still pending from a previous close.
        self.hide_timer.borrow_mut().take();
        if let Some(title) = &self.title {
            title.set_text_content(Some(&topic));
        }
        self.core.borrow_mut().open(topic);

        set_style(&self.backdrop, "display", "flex");
        set_attr(&self.backdrop, "aria-hidden", "false");

        let view = Rc::clone(self);
        let on_frame = Closure::once_into_js(move || view.show());
        let scheduled = web_sys::window()
            .is_some_and(|w| w.request_animation_frame(on_frame.unchecked_ref()).is_ok());
        if !scheduled {
            self.show();
        }

        if let Some(primary) = &self.primary {
            if primary.focus().is_err() {
                log::debug!("modal primary action not focusable");
            }
        }
    }

    fn show(&self) {
        if !self.core.borrow_mut().shown() {
            return;
        }
        if let Some(dialog) = &self.dialog {
            set_class(dialog, true);
        }
    }

    fn close(self: &Rc<Self>, trigger: CloseTrigger) {
        if !self.core.borrow_mut().request_close(trigger) {
            return;
        }
        if let Some(dialog) = &self.dialog {
            set_class(dialog, false);
        }
        set_attr(&self.backdrop, "aria-hidden", "true");

        let view = Rc::clone(self);
        let timer = Timeout::new(MODAL_HIDE_DELAY_MS, move || view.hide());
        *self.hide_timer.borrow_mut() = Some(timer);
    }

    fn hide(&self) {
        if self.core.borrow_mut().finish_close() {
            set_style(&self.backdrop, "display", "none");
        }
    }
}

#[cfg(feature = "hydrate")]
fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if el.style().set_property(property, value).is_err() {
        log::warn!("could not set {property} on modal backdrop");
    }
}

#[cfg(feature = "hydrate")]
fn set_attr(el: &HtmlElement, name: &str, value: &str) {
    if el.set_attribute(name, value).is_err() {
        log::warn!("could not set {name} on modal backdrop");
    }
}

#[cfg(feature = "hydrate")]
fn set_class(dialog: &HtmlElement, shown: bool) {
    if dialog
        .class_list()
        .toggle_with_force(MODAL_SHOWN_CLASS, shown)
        .is_err()
    {
        log::warn!("could not toggle modal visibility class");
    }
}

#[cfg(feature = "hydrate")]
fn topic_of(el: &HtmlElement) -> String {
    let text = el.text_content();
    topic_label(el.get_attribute("data-topic").as_deref(), text.as_deref().map(str::trim))
}

/// Wire topic triggers and modal controls. Does nothing when the page has no
/// topic tiles or no backdrop.
#[cfg(feature = "hydrate")]
pub fn bind(document: &Document) {
    let Ok(nodes) = document.query_selector_all(TOPIC_SELECTOR) else {
        return;
    };
    let topics = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect::<Vec<_>>();
    if topics.is_empty() {
        return;
    }
    let Some(backdrop) = element_by_id::<HtmlElement>(document, MODAL_BACKDROP_ID) else {
        return;
    };

    let view = Rc::new(ModalView {
        backdrop,
        dialog: element_by_id(document, MODAL_DIALOG_ID),
        title: element_by_id(document, MODAL_TOPIC_ID),
        primary: element_by_id(document, MODAL_PRIMARY_ACTION_ID),
        core: RefCell::new(ModalCore::new()),
        hide_timer: RefCell::new(None),
    });

    for topic in &topics {
        {
            let view = Rc::clone(&view);
            let el = topic.clone();
            listen(topic, "click", move |_| view.open(topic_of(&el)));
        }
        {
            let view = Rc::clone(&view);
            let el = topic.clone();
            listen(topic, "keydown", move |ev| {
                if event_key(&ev).is_some_and(|key| is_activation_key(&key)) {
                    ev.prevent_default();
                    view.open(topic_of(&el));
                }
            });
        }
    }

    for id in MODAL_CLOSE_IDS {
        let Some(control) = document.get_element_by_id(id) else {
            continue;
        };
        let view = Rc::clone(&view);
        listen(&control, "click", move |_| view.close(CloseTrigger::Control));
    }

    {
        let backdrop_target: EventTarget = view.backdrop.clone().into();
        let view_for_cb = Rc::clone(&view);
        listen(&view.backdrop, "click", move |ev| {
            let on_backdrop = ev.target().as_ref() == Some(&backdrop_target);
            view_for_cb.close(CloseTrigger::Backdrop { on_backdrop });
        });
    }

    listen(document, "keydown", move |ev| {
        if event_key(&ev).is_some_and(|key| is_escape_key(&key)) {
            view.close(CloseTrigger::Escape);
        }
    });

    log::debug!("topic modal bound to {} triggers", topics.len());
}
