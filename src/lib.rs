//! # cognify-site
//!
//! WebAssembly runtime for the Cognify landing page. The static markup ships
//! without behavior; this crate inlines the HTML partials, then wires up the
//! theme toggle, the animated background, the topic modal, the testimonial
//! carousel and the footer year.
//!
//! Pure state (theme flag, modal phases, carousel cursor and autoplay, wave
//! geometry) compiles and tests natively. Everything that touches the DOM is
//! gated behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`net`] | Fragment loading over HTTP |
//! | [`state`] | Theme, modal and carousel state machines |
//! | [`components`] | DOM bindings for each page component |
//! | [`util`] | Storage, motion preference, DOM and wave helpers |
//! | [`page`] | Boot sequence: fragments first, then every component |
//! | [`consts`] | Element ids, class names, timings |

pub mod components;
pub mod consts;
pub mod net;
pub mod page;
pub mod state;
pub mod util;

/// WASM entry point. Installs the panic hook and console logger, then runs
/// the page boot sequence as a local task.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    wasm_bindgen_futures::spawn_local(page::boot());
}
