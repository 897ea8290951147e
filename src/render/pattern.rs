//! Procedural overlay patterns drawn inside leaf cells
//!
//! Line and dot spacing shrinks with depth, so deep cells get finer texture.

use crate::math::interpolation::lerp;
use crate::render::canvas::Canvas;
use crate::spatial::rect::Rect;

/// Smallest spacing in pixels between pattern strokes
pub const MIN_PATTERN_SPACING: f64 = 3.0;

/// Overlay pattern of a leaf cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pattern {
    /// Plain fill
    #[default]
    None,
    /// Diagonal hatching in one direction
    Hatch,
    /// Regular grid of dots
    Dots,
    /// Diagonal hatching in both directions
    CrossHatch,
    /// Concentric rings around the cell center
    Rings,
}

impl Pattern {
    /// Every pattern, in lookup order
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Hatch,
        Self::Dots,
        Self::CrossHatch,
        Self::Rings,
    ];

    /// Pick a pattern from a value in `[0, 1]`, splitting the range evenly
    pub fn from_unit(value: f64) -> Self {
        let value = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let index = ((value * Self::ALL.len() as f64) as usize).min(Self::ALL.len() - 1);
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// World-space spacing at a normalized depth in `[0, 1]`
    ///
    /// Shallow cells use the wide end of each range, the deepest the narrow end.
    pub fn spacing(self, depth: f64) -> f64 {
        let depth = if depth.is_finite() { depth.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Self::None | Self::Rings => 6.0,
            Self::Hatch => lerp(22.0, 8.0, depth),
            Self::Dots => lerp(9.0, 4.0, depth),
            Self::CrossHatch => lerp(26.0, 10.0, depth),
        }
    }

    /// Overlay the pattern on `rect` (surface coordinates) with the given ink and opacity
    pub fn draw(self, canvas: &mut Canvas, rect: &Rect, spacing: f64, ink: [u8; 4], alpha: f64) {
        let spacing = if spacing.is_finite() {
            spacing.max(MIN_PATTERN_SPACING)
        } else {
            MIN_PATTERN_SPACING
        };
        match self {
            Self::None => {}
            Self::Dots => draw_dots(canvas, rect, spacing, ink, alpha),
            _ => self.draw_strokes(canvas, rect, spacing, ink, alpha),
        }
    }

    fn draw_strokes(
        self,
        canvas: &mut Canvas,
        rect: &Rect,
        spacing: f64,
        ink: [u8; 4],
        alpha: f64,
    ) {
        let Some((x0, y0, x1, y1)) = canvas.pixel_span(rect) else {
            return;
        };
        let (cx, cy) = rect.center();

        for y in y0..y1 {
            for x in x0..x1 {
                let local_x = f64::from(x) - rect.x;
                let local_y = f64::from(y) - rect.y;
                let from_center = (f64::from(x) + 0.5 - cx, f64::from(y) + 0.5 - cy);
                if self.covers(local_x, local_y, from_center.0, from_center.1, spacing) {
                    canvas.blend(i64::from(x), i64::from(y), ink, alpha);
                }
            }
        }
    }

    // Whether a pixel at local offset (lx, ly) and center offset (dx, dy) carries ink
    fn covers(self, lx: f64, ly: f64, dx: f64, dy: f64, spacing: f64) -> bool {
        let on_line = |value: f64| value.rem_euclid(spacing) < 1.0;
        match self {
            Self::None | Self::Dots => false,
            Self::Hatch => on_line(lx + ly),
            Self::CrossHatch => on_line(lx + ly) || on_line(lx - ly),
            Self::Rings => {
                let thickness = (spacing * 0.15).max(1.0);
                dx.hypot(dy).rem_euclid(spacing) < thickness
            }
        }
    }
}

// Grid of discs inset by half a spacing, visiting only rows and columns on the surface
fn draw_dots(canvas: &mut Canvas, rect: &Rect, spacing: f64, ink: [u8; 4], alpha: f64) {
    if canvas.pixel_span(rect).is_none() {
        return;
    }
    let margin = spacing / 2.0;
    let radius = (spacing * 0.12).max(0.75);
    let axis = |start: f64, end: f64, limit: u32| {
        let first = ((-spacing - start - margin) / spacing).ceil().max(0.0);
        let stop = (end - margin).min(f64::from(limit) + spacing);
        (first, stop)
    };
    let (first_col, stop_x) = axis(rect.x, rect.right(), canvas.width());
    let (first_row, stop_y) = axis(rect.y, rect.bottom(), canvas.height());

    let mut row = first_row;
    loop {
        let y = row.mul_add(spacing, rect.y + margin);
        if y >= stop_y {
            break;
        }
        let mut col = first_col;
        loop {
            let x = col.mul_add(spacing, rect.x + margin);
            if x >= stop_x {
                break;
            }
            canvas.fill_circle(x, y, radius, ink, alpha);
            col += 1.0;
        }
        row += 1.0;
    }
}
