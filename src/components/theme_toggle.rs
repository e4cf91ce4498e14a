//! Theme toggle control.
//!
//! Loads the stored preference before anything paints, mirrors it onto
//! `<html>`, and flips it on click or Enter/Space. The returned
//! [`ThemeState`] is the handle the background renderer reads.

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlElement};

#[cfg(feature = "hydrate")]
use crate::consts::THEME_BUTTON_ID;
#[cfg(feature = "hydrate")]
use crate::state::theme::{Theme, ThemeController, ThemeState};
#[cfg(feature = "hydrate")]
use crate::util::dark_mode::{self, BrowserStorage};
#[cfg(feature = "hydrate")]
use crate::util::dom::{element_by_id, event_key, is_activation_key, listen};

/// Initialize the theme and wire the toggle control, if present.
#[cfg(feature = "hydrate")]
pub fn bind(document: &Document) -> ThemeState {
    let controller = Rc::new(ThemeController::new(ThemeState::default(), BrowserStorage::default()));
    let theme = controller.initialize();
    dark_mode::apply(theme);
    let state = controller.state().clone();

    let Some(button) = element_by_id::<HtmlElement>(document, THEME_BUTTON_ID) else {
        return state;
    };
    set_pressed(&button, theme);

    {
        let button_for_cb = button.clone();
        listen(&button, "click", move |_| {
            let theme = controller.toggle();
            dark_mode::apply(theme);
            set_pressed(&button_for_cb, theme);
        });
    }
    {
        let button_for_cb = button.clone();
        listen(&button, "keydown", move |ev| {
            if event_key(&ev).is_some_and(|key| is_activation_key(&key)) {
                ev.prevent_default();
                button_for_cb.click();
            }
        });
    }

    log::debug!("theme initialized: {}", theme.as_str());
    state
}

#[cfg(feature = "hydrate")]
fn set_pressed(button: &HtmlElement, theme: Theme) {
    if button.set_attribute("aria-pressed", theme.aria_pressed()).is_err() {
        log::warn!("could not update theme toggle state");
    }
}
