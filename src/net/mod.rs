//! Network access for the page runtime.
//!
//! The page only ever issues plain `GET` requests for static HTML partials;
//! there is no API client.

pub mod fragments;
