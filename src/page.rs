//! Page boot sequence.
//!
//! Fragments are inlined first so that components inside them (the header
//! toggle, footer year) exist before any binding looks them up. Components
//! are then initialized independently; a missing element disables only that
//! component.

#[cfg(feature = "hydrate")]
use web_sys::Document;

#[cfg(feature = "hydrate")]
use crate::components::{background, footer_year, testimonial_carousel, theme_toggle, topic_modal};
#[cfg(feature = "hydrate")]
use crate::net::fragments;
#[cfg(feature = "hydrate")]
use crate::util::dom;

/// Inline every fragment, then bring up the components.
#[cfg(feature = "hydrate")]
pub async fn boot() {
    let Some(document) = dom::document() else {
        log::error!("no document; page left static");
        return;
    };
    let report = fragments::load_document(&document).await;
    log::debug!(
        "fragments: {} inlined, {} cleared, {} failed, {} skipped",
        report.inlined,
        report.cleared,
        report.failed,
        report.skipped
    );
    init_page(&document);
}

/// Initialize every component against `document`.
#[cfg(feature = "hydrate")]
pub fn init_page(document: &Document) {
    let theme = theme_toggle::bind(document);
    if background::bind(document, theme).is_none() {
        log::debug!("background animation off");
    }
    topic_modal::bind(document);
    testimonial_carousel::bind(document);
    footer_year::bind(document);
}
