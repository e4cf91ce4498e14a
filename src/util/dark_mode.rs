//! Theme preference persistence and the `<html>` class mirror.
//!
//! Reads and writes the preference under `cognify_theme` in `localStorage`
//! and toggles the `theme-dark` class on the `<html>` element. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; storage that
//! is missing or throws reads as "no preference", and native builds safely
//! no-op so state logic stays testable.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::consts::THEME_STORAGE_KEY;
#[cfg(feature = "hydrate")]
use crate::consts::DARK_THEME_CLASS;
use crate::state::theme::Theme;

/// Key-value slot holding the raw theme preference.
pub trait PreferenceStore {
    /// The stored value, or `None` when absent or unreadable.
    fn load(&self) -> Option<String>;

    /// Persist `value`. Failures are ignored.
    fn save(&self, value: &str);
}

/// `localStorage`-backed preference slot.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    key: &'static str,
}

impl BrowserStorage {
    #[must_use]
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new(THEME_STORAGE_KEY)
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(value) = storage.get_item(self.key) {
                    return value;
                }
            }
            None
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(self.key, value).is_err() {
                    log::debug!("theme preference not persisted");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }
}

/// Mirror `theme` onto the `theme-dark` class of the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if root
            .class_list()
            .toggle_with_force(DARK_THEME_CLASS, theme.is_dark())
            .is_err()
        {
            log::warn!("could not update root theme class");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
