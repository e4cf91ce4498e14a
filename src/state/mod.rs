//! Page state owned by the interactive components.
//!
//! DESIGN
//! ======
//! Each module holds a browser-independent state machine. Components in
//! [`crate::components`] translate DOM events into calls on these types and
//! apply the results back to the DOM, so every transition is testable
//! natively.

pub mod carousel;
pub mod modal;
pub mod testimonials;
pub mod theme;
