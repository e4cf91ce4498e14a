//! Feedback carousel: renders the testimonial cards and moves a highlighted
//! card through them by button, arrow key, or autoplay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards are rendered with Leptos into the static `feedbackHorizontal`
//! container. Navigation state lives in [`CarouselCore`]; this module owns
//! the interval handle and applies the [`TimerCommand`]s the core returns,
//! so replacing or taking the handle is the only way a timer starts or stops.

#[cfg(test)]
#[path = "testimonial_carousel_test.rs"]
mod testimonial_carousel_test;

use leptos::prelude::*;

use crate::state::testimonials::{TESTIMONIALS, Testimonial};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

#[cfg(feature = "hydrate")]
use crate::consts::{
    AUTOPLAY_INTERVAL_MS, CAROUSEL_CARD_SELECTOR, CAROUSEL_CONTAINER_ID, CAROUSEL_NEXT_ID, CAROUSEL_PREV_ID,
};
#[cfg(feature = "hydrate")]
use crate::state::carousel::{CarouselCore, Direction, TimerCommand, direction_for_key};
#[cfg(feature = "hydrate")]
use crate::util::dom::{element_by_id, event_key, listen};
#[cfg(feature = "hydrate")]
use crate::util::motion::prefers_reduced_motion;

/// One testimonial card.
#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="fb-card">
            <div class="avatar" style:background=testimonial.color>{testimonial.initials()}</div>
            <div class="fb-body">
                <div style="display:flex;justify-content:space-between;align-items:center">
                    <div>
                        <strong>{testimonial.name}</strong>
                        <div class="muted" style="font-size:13px">"Student"</div>
                    </div>
                    <div class="stars" aria-hidden="true">{testimonial.stars()}</div>
                </div>
                <p style="margin-top:8px;color:var(--muted)">{testimonial.text}</p>
            </div>
        </div>
    }
}

/// Every testimonial card, in record order.
pub fn testimonial_cards() -> impl IntoView {
    TESTIMONIALS
        .iter()
        .map(|testimonial| view! { <TestimonialCard testimonial=*testimonial/> })
        .collect_view()
}

#[cfg(feature = "hydrate")]
struct CarouselView {
    cards: Vec<Element>,
    core: RefCell<CarouselCore>,
    timer: RefCell<Option<Interval>>,
}

#[cfg(feature = "hydrate")]
impl CarouselView {
    fn navigate(self: &Rc<Self>, direction: Direction) {
        let (index, command) = self.core.borrow_mut().navigate(direction);
        self.scroll_to(index);
        self.apply(command);
    }

    fn tick(&self) {
        let next = self.core.borrow_mut().tick();
        if let Some(index) = next {
            self.scroll_to(index);
        }
    }

    fn hover(self: &Rc<Self>, entering: bool) {
        let command = if entering {
            self.core.borrow_mut().hover_enter()
        } else {
            self.core.borrow_mut().hover_leave()
        };
        self.apply(command);
    }

    fn apply(self: &Rc<Self>, command: TimerCommand) {
        match command {
            TimerCommand::Start => {
                // Invalidate before recreating so two intervals never overlap.
                self.timer.borrow_mut().take();
                let view = Rc::clone(self);
                let interval = Interval::new(AUTOPLAY_INTERVAL_MS, move || view.tick());
                *self.timer.borrow_mut() = Some(interval);
            }
            TimerCommand::Stop => {
                self.timer.borrow_mut().take();
            }
            TimerCommand::Keep => {}
        }
    }

    fn scroll_to(&self, index: usize) {
        let Some(card) = self.cards.get(index) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if prefers_reduced_motion() {
            ScrollBehavior::Auto
        } else {
            ScrollBehavior::Smooth
        });
        options.set_inline(ScrollLogicalPosition::Center);
        options.set_block(ScrollLogicalPosition::Nearest);
        card.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(feature = "hydrate")]
fn mount_cards(container: &HtmlElement) -> Vec<Element> {
    let handle = leptos::mount::mount_to(container.clone(), testimonial_cards);
    // The cards stay for the page's lifetime.
    std::mem::forget(handle);

    let Ok(nodes) = container.query_selector_all(CAROUSEL_CARD_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Render the cards into the carousel container and wire navigation and
/// autoplay. Does nothing when the container is missing.
#[cfg(feature = "hydrate")]
pub fn bind(document: &Document) {
    let Some(container) = element_by_id::<HtmlElement>(document, CAROUSEL_CONTAINER_ID) else {
        return;
    };
    let cards = mount_cards(&container);
    let Some(core) = CarouselCore::new(cards.len(), prefers_reduced_motion()) else {
        return;
    };
    let start = core.start();
    let view = Rc::new(CarouselView { cards, core: RefCell::new(core), timer: RefCell::new(None) });

    let prev = document.get_element_by_id(CAROUSEL_PREV_ID);
    let next = document.get_element_by_id(CAROUSEL_NEXT_ID);
    for (control, direction) in [(&prev, Direction::Previous), (&next, Direction::Next)] {
        if let Some(control) = control {
            let view = Rc::clone(&view);
            listen(control, "click", move |_| view.navigate(direction));
        }
    }

    {
        let view = Rc::clone(&view);
        listen(&container, "keydown", move |ev| {
            let Some(direction) = event_key(&ev).as_deref().and_then(direction_for_key) else {
                return;
            };
            ev.prevent_default();
            view.navigate(direction);
        });
    }

    let hover_targets = [prev, next, Some(container.into())];
    for target in hover_targets.iter().flatten() {
        let on_enter = Rc::clone(&view);
        listen(target, "mouseenter", move |_| on_enter.hover(true));
        let on_leave = Rc::clone(&view);
        listen(target, "mouseleave", move |_| on_leave.hover(false));
    }

    view.apply(start);
    log::debug!("carousel ready with {} cards", view.cards.len());
}
