//! DOM bindings for the page components.
//!
//! ARCHITECTURE
//! ============
//! Each module finds its elements by id, attaches listeners, and forwards
//! events to the matching state machine in [`crate::state`]. A component
//! whose elements are missing does nothing; there is no cross-component
//! coupling except the shared [`crate::state::theme::ThemeState`].

pub mod background;
pub mod footer_year;
pub mod testimonial_carousel;
pub mod theme_toggle;
pub mod topic_modal;
