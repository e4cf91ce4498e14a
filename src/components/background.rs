//! Animated page background: a theme-dependent gradient under three
//! drifting wave bands.
//!
//! ARCHITECTURE
//! ============
//! [`BackgroundRenderer`] owns the canvas, its 2D context and the
//! self-rescheduling animation-frame callback. Every frame first resizes the
//! backing store from the element's CSS box, then paints, so a frame never
//! draws at stale dimensions. A passive window `resize` listener also resizes
//! immediately between frames.
//!
//! The callback holds a strong reference to the renderer, so the loop keeps
//! itself alive after the page drops its handle. [`BackgroundRenderer::stop`]
//! cancels the pending frame and releases the callback.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

#[cfg(feature = "hydrate")]
use crate::consts::BACKGROUND_CANVAS_ID;
#[cfg(feature = "hydrate")]
use crate::state::theme::{Theme, ThemeState};
#[cfg(feature = "hydrate")]
use crate::util::dom::{element_by_id, listen_passive};
#[cfg(feature = "hydrate")]
use crate::util::motion::{device_pixel_ratio, prefers_reduced_motion};
#[cfg(feature = "hydrate")]
use crate::util::waves::{SurfaceSize, WAVE_LAYERS, capped_dpr, gradient_for, wave_polygon};

/// Lifecycle of the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
    /// Reduced motion requested; the loop can never start.
    Disabled,
}

impl LoopState {
    #[must_use]
    pub fn for_motion_preference(reduced_motion: bool) -> Self {
        if reduced_motion { Self::Disabled } else { Self::Idle }
    }

    /// Returns `true` if the loop should schedule its first frame.
    pub fn start(&mut self) -> bool {
        if matches!(self, Self::Idle | Self::Stopped) {
            *self = Self::Running;
            return true;
        }
        false
    }

    /// Returns `true` if a running loop was stopped.
    pub fn stop(&mut self) -> bool {
        if *self == Self::Running {
            *self = Self::Stopped;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

#[cfg(feature = "hydrate")]
struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: ThemeState,
    state: Cell<LoopState>,
    frame_id: Cell<Option<i32>>,
    frame_cb: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

/// Handle to the background frame loop. Clones control the same loop.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct BackgroundRenderer {
    surface: Rc<Surface>,
}

#[cfg(feature = "hydrate")]
impl BackgroundRenderer {
    /// Bind to `canvas`. `None` when the 2D context is unavailable.
    pub fn new(canvas: HtmlCanvasElement, theme: ThemeState, reduced_motion: bool) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let surface = Surface {
            canvas,
            ctx,
            theme,
            state: Cell::new(LoopState::for_motion_preference(reduced_motion)),
            frame_id: Cell::new(None),
            frame_cb: RefCell::new(None),
        };
        Some(Self { surface: Rc::new(surface) })
    }

    /// Begin the frame loop. Returns `false` if it is already running or
    /// disabled by the motion preference.
    pub fn start(&self) -> bool {
        let mut state = self.surface.state.get();
        if !state.start() {
            return false;
        }
        self.surface.state.set(state);

        let surface = Rc::clone(&self.surface);
        let cb = Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| surface.on_frame(now_ms));
        *self.surface.frame_cb.borrow_mut() = Some(cb);
        self.surface.request_frame();
        true
    }

    /// Cancel the pending frame and release the loop callback. Must not be
    /// called from inside a frame.
    pub fn stop(&self) {
        let mut state = self.surface.state.get();
        if !state.stop() {
            return;
        }
        self.surface.state.set(state);
        if let (Some(id), Some(window)) = (self.surface.frame_id.take(), web_sys::window()) {
            if window.cancel_animation_frame(id).is_err() {
                log::debug!("background frame already gone");
            }
        }
        self.surface.frame_cb.borrow_mut().take();
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.surface.state.get()
    }

    /// Match the backing store to the element's current CSS size.
    pub fn resize(&self) -> SurfaceSize {
        self.surface.resize()
    }
}

#[cfg(feature = "hydrate")]
impl Surface {
    fn request_frame(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = self.frame_cb.borrow();
        let Some(cb) = cb.as_ref() else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.frame_id.set(Some(id)),
            Err(err) => log::warn!("background frame not scheduled: {err:?}"),
        }
    }

    fn on_frame(&self, now_ms: f64) {
        if !self.state.get().is_running() {
            return;
        }
        let size = self.resize();
        let elapsed_s = now_ms * 0.001;
        if let Err(err) = paint(&self.ctx, size.logical_width(), size.logical_height(), self.theme.get(), elapsed_s) {
            log::warn!("background frame failed: {err:?}");
        }
        self.request_frame();
    }

    fn resize(&self) -> SurfaceSize {
        let rect = self.canvas.get_bounding_client_rect();
        let dpr = capped_dpr(device_pixel_ratio());
        let size = SurfaceSize::new(rect.width(), rect.height(), dpr);
        self.canvas.set_width(size.pixel_width);
        self.canvas.set_height(size.pixel_height);

        let style = self.canvas.style();
        let css_width = style.set_property("width", &format!("{}px", rect.width()));
        let css_height = style.set_property("height", &format!("{}px", rect.height()));
        let transform = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        if css_width.and(css_height).and(transform).is_err() {
            log::warn!("background resize incomplete");
        }
        size
    }
}

/// Paint one frame at logical size `width` × `height`.
#[cfg(feature = "hydrate")]
fn paint(ctx: &CanvasRenderingContext2d, width: f64, height: f64, theme: Theme, elapsed_s: f64) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);

    let palette = gradient_for(theme);
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
    gradient.add_color_stop(0.0, palette.top)?;
    gradient.add_color_stop(1.0, palette.bottom)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, width, height);

    for layer in &WAVE_LAYERS {
        let points = wave_polygon(layer, width, height, elapsed_s);
        let mut points = points.into_iter();
        ctx.begin_path();
        if let Some((x, y)) = points.next() {
            ctx.move_to(x, y);
        }
        for (x, y) in points {
            ctx.line_to(x, y);
        }
        ctx.close_path();
        ctx.set_fill_style_str(layer.color);
        ctx.fill();
    }
    Ok(())
}

/// Start the background on the `bgCanvas` element unless reduced motion is
/// requested or the canvas is missing.
#[cfg(feature = "hydrate")]
pub fn bind(document: &Document, theme: ThemeState) -> Option<BackgroundRenderer> {
    let canvas = element_by_id::<HtmlCanvasElement>(document, BACKGROUND_CANVAS_ID)?;
    let renderer = BackgroundRenderer::new(canvas, theme, prefers_reduced_motion())?;
    if !renderer.start() {
        return None;
    }

    if let Some(window) = web_sys::window() {
        let on_resize = renderer.clone();
        listen_passive(&window, "resize", move |_| {
            on_resize.resize();
        });
    }
    Some(renderer)
}
