//! Light/dark theme flag shared between the toggle and the background.
//!
//! DESIGN
//! ======
//! [`ThemeState`] is the single source of truth for the active theme. The
//! toggle control writes it and the background renderer reads it every
//! frame; the `<html>` class is a mirror for stylesheets and is never read
//! back.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::util::dark_mode::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Only the exact value `"dark"` selects
    /// dark mode; anything else, including no value, is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value for the toggle control's `aria-pressed` attribute.
    #[must_use]
    pub fn aria_pressed(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}

/// Shared handle to the active theme. Clones observe the same value.
#[derive(Clone, Debug, Default)]
pub struct ThemeState(Rc<Cell<Theme>>);

impl ThemeState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self(Rc::new(Cell::new(theme)))
    }

    #[must_use]
    pub fn get(&self) -> Theme {
        self.0.get()
    }

    pub fn set(&self, theme: Theme) {
        self.0.set(theme);
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.get().is_dark()
    }
}

/// Couples the shared theme flag with its persisted preference.
pub struct ThemeController<S> {
    state: ThemeState,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(state: ThemeState, store: S) -> Self {
        Self { state, store }
    }

    /// Load the persisted preference into the shared state.
    pub fn initialize(&self) -> Theme {
        let theme = Theme::from_stored(self.store.load().as_deref());
        self.state.set(theme);
        theme
    }

    /// Flip the theme and persist the new value. Returns the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.state.get().toggled();
        self.state.set(next);
        self.store.save(next.as_str());
        next
    }

    #[must_use]
    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
