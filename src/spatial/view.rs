//! Pan and zoom transform between world and screen coordinates

use crate::io::configuration::{MAX_SCALE, MIN_SCALE, ZOOM_SENSITIVITY};
use crate::spatial::rect::Rect;

/// View transform mapping world coordinates to screen coordinates
///
/// `screen = world * scale + pan`. Dragging moves the pan offset, wheel input
/// zooms about the pointer and a reset restores the identity transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
    drag_anchor: Option<(f64, f64)>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// Identity transform
    pub const fn new() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            drag_anchor: None,
        }
    }

    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Current pan offset in screen units
    pub const fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    /// Convert world coordinates to screen coordinates
    pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
        (
            wx.mul_add(self.scale, self.pan_x),
            wy.mul_add(self.scale, self.pan_y),
        )
    }

    /// Convert screen coordinates to world coordinates
    pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        ((sx - self.pan_x) / self.scale, (sy - self.pan_y) / self.scale)
    }

    /// Map a world rectangle onto the screen
    pub fn rect_to_screen(&self, rect: &Rect) -> Rect {
        let (x, y) = self.world_to_screen(rect.x, rect.y);
        Rect::new(x, y, rect.width * self.scale, rect.height * self.scale)
    }

    /// Zoom about a screen point by a wheel delta
    ///
    /// Positive deltas zoom out. The world point under `(sx, sy)` before the
    /// zoom is mapped back to `(sx, sy)` afterwards.
    pub fn zoom_at(&mut self, sx: f64, sy: f64, delta: f64) {
        if !(sx.is_finite() && sy.is_finite() && delta.is_finite()) {
            return;
        }
        let (wx, wy) = self.screen_to_world(sx, sy);
        let factor = (-delta * ZOOM_SENSITIVITY).exp();
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        self.pan_x = wx.mul_add(-self.scale, sx);
        self.pan_y = wy.mul_add(-self.scale, sy);
    }

    /// Pan by a screen-space delta
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if dx.is_finite() && dy.is_finite() {
            self.pan_x += dx;
            self.pan_y += dy;
        }
    }

    /// Start a drag at a screen point
    pub const fn begin_drag(&mut self, sx: f64, sy: f64) {
        self.drag_anchor = Some((sx, sy));
    }

    /// Continue a drag, panning by the pointer movement since the last event
    ///
    /// Ignored when no drag is in progress.
    pub fn drag_to(&mut self, sx: f64, sy: f64) {
        if let Some((ax, ay)) = self.drag_anchor {
            self.pan_by(sx - ax, sy - ay);
            self.drag_anchor = Some((sx, sy));
        }
    }

    /// Finish a drag
    pub const fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Restore scale 1 and pan (0, 0)
    ///
    /// A drag in progress keeps its anchor and continues panning from the
    /// restored view.
    pub const fn reset(&mut self) {
        self.scale = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    pub fn is_identity(&self) -> bool {
        (self.scale - 1.0).abs() <= f64::EPSILON && self.pan_x == 0.0 && self.pan_y == 0.0
    }
}
