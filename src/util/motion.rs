//! Platform motion and display signals.
//!
//! Both values are read at call time; nothing here caches or subscribes to
//! media query changes.

#[cfg(feature = "hydrate")]
use crate::consts::REDUCED_MOTION_QUERY;

/// Whether the user asked the platform for reduced motion.
///
/// Always `false` outside the browser.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(query)) => query.matches(),
            _ => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// The window's raw device pixel ratio, `1.0` when unavailable.
pub fn device_pixel_ratio() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        1.0
    }
}
