//! Shared constants: DOM contract, storage key, timings.

// ── DOM contract ────────────────────────────────────────────────

/// Attribute naming the partial to inline into a placeholder element.
pub const FRAGMENT_ATTR: &str = "data-include";

pub const THEME_BUTTON_ID: &str = "themeBtn";
pub const BACKGROUND_CANVAS_ID: &str = "bgCanvas";

pub const MODAL_BACKDROP_ID: &str = "modalBackdrop";
pub const MODAL_DIALOG_ID: &str = "priceModal";
pub const MODAL_TOPIC_ID: &str = "modalTopic";
pub const MODAL_CLOSE_IDS: [&str; 2] = ["modalClose", "modalClose2"];
pub const MODAL_PRIMARY_ACTION_ID: &str = "modalSignup";
/// Selector for elements that open the modal.
pub const TOPIC_SELECTOR: &str = ".topic";

pub const CAROUSEL_CONTAINER_ID: &str = "feedbackHorizontal";
pub const CAROUSEL_PREV_ID: &str = "fbPrev";
pub const CAROUSEL_NEXT_ID: &str = "fbNext";
pub const CAROUSEL_CARD_SELECTOR: &str = ".fb-card";

pub const YEAR_ID: &str = "year";

// ── Classes ─────────────────────────────────────────────────────

/// Class on `<html>` while dark mode is active.
pub const DARK_THEME_CLASS: &str = "theme-dark";
/// Class on the modal dialog while it is visible.
pub const MODAL_SHOWN_CLASS: &str = "show";

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "cognify_theme";

// ── Timing ──────────────────────────────────────────────────────

/// Carousel autoplay period.
pub const AUTOPLAY_INTERVAL_MS: u32 = 2800;
/// Delay between starting the modal close transition and hiding the backdrop.
pub const MODAL_HIDE_DELAY_MS: u32 = 260;

// ── Background ──────────────────────────────────────────────────

/// Upper bound on the device pixel ratio used for the background surface.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
/// Horizontal distance between wave samples, in CSS pixels.
pub const WAVE_SAMPLE_STEP_PX: f64 = 12.0;

// ── Media queries ───────────────────────────────────────────────

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
