//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, media
//! queries, event wiring) from component logic to improve reuse and
//! testability.

pub mod dark_mode;
pub mod dom;
pub mod motion;
pub mod waves;
