//! Background geometry: surface sizing, gradient palettes, wave polygons.
//!
//! Everything here is pure so the per-frame math can be tested without a
//! canvas. [`crate::components::background`] feeds the results to the 2D
//! context.

#[cfg(test)]
#[path = "waves_test.rs"]
mod waves_test;

use std::f64::consts::TAU;

use crate::consts::{MAX_DEVICE_PIXEL_RATIO, WAVE_SAMPLE_STEP_PX};
use crate::state::theme::Theme;

/// One translucent sine band painted over the gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveLayer {
    /// Peak vertical offset from the baseline, in CSS pixels.
    pub amplitude: f64,
    /// Horizontal period, in CSS pixels.
    pub wavelength: f64,
    /// Phase speed, in cycles per second.
    pub speed: f64,
    pub color: &'static str,
    /// Baseline as a fraction of the surface height.
    pub baseline: f64,
}

/// Layers in paint order (back to front).
pub const WAVE_LAYERS: [WaveLayer; 3] = [
    WaveLayer { amplitude: 30.0, wavelength: 460.0, speed: 0.18, color: "rgba(79,70,229,0.12)", baseline: 0.58 },
    WaveLayer { amplitude: 18.0, wavelength: 300.0, speed: 0.12, color: "rgba(20,184,166,0.08)", baseline: 0.66 },
    WaveLayer { amplitude: 10.0, wavelength: 180.0, speed: 0.07, color: "rgba(245,158,11,0.06)", baseline: 0.74 },
];

/// Two-stop vertical gradient filling the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub top: &'static str,
    pub bottom: &'static str,
}

pub const LIGHT_GRADIENT: Gradient = Gradient { top: "rgba(255,255,255,0.98)", bottom: "rgba(248,250,252,0.96)" };
pub const DARK_GRADIENT: Gradient = Gradient { top: "rgba(6,12,24,0.7)", bottom: "rgba(3,7,18,0.7)" };

#[must_use]
pub fn gradient_for(theme: Theme) -> Gradient {
    match theme {
        Theme::Light => LIGHT_GRADIENT,
        Theme::Dark => DARK_GRADIENT,
    }
}

/// Clamp the device pixel ratio to `(0, MAX_DEVICE_PIXEL_RATIO]`.
///
/// Missing or nonsensical ratios (zero, negative, NaN) count as `1.0`.
#[must_use]
pub fn capped_dpr(raw: f64) -> f64 {
    let ratio = if raw.is_finite() && raw > 0.0 { raw } else { 1.0 };
    ratio.min(MAX_DEVICE_PIXEL_RATIO)
}

/// Backing-store dimensions for a surface displayed at a given CSS size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub dpr: f64,
}

impl SurfaceSize {
    /// Size the backing store as `floor(css * dpr)`, never below one pixel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(css_width: f64, css_height: f64, dpr: f64) -> Self {
        let scale = |css: f64| (css * dpr).floor().max(1.0) as u32;
        Self { pixel_width: scale(css_width), pixel_height: scale(css_height), dpr }
    }

    /// Drawable width in CSS pixels after the DPR transform.
    #[must_use]
    pub fn logical_width(&self) -> f64 {
        f64::from(self.pixel_width) / self.dpr
    }

    /// Drawable height in CSS pixels after the DPR transform.
    #[must_use]
    pub fn logical_height(&self) -> f64 {
        f64::from(self.pixel_height) / self.dpr
    }
}

/// Vertical position of `layer` at horizontal offset `x`.
#[must_use]
pub fn wave_y(layer: &WaveLayer, x: f64, height: f64, elapsed_s: f64) -> f64 {
    let base = (height * layer.baseline).round();
    let theta = (x / layer.wavelength) * TAU;
    base + (theta + elapsed_s * layer.speed * TAU).sin() * layer.amplitude
}

/// Closed polygon for one layer: bottom-left corner, the sampled crest line,
/// then bottom-right corner.
#[must_use]
pub fn wave_polygon(layer: &WaveLayer, width: f64, height: f64, elapsed_s: f64) -> Vec<(f64, f64)> {
    let mut points = vec![(0.0, height)];
    let mut x = 0.0;
    while x <= width {
        points.push((x, wave_y(layer, x, height, elapsed_s)));
        x += WAVE_SAMPLE_STEP_PX;
    }
    points.push((width, height));
    points
}
