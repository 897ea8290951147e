//! RGBA raster surface every mode renders into
//!
//! All drawing is clipped to the surface; coordinates outside it are ignored
//! rather than treated as errors.

use crate::math::interpolation::lerp_channel;
use crate::spatial::rect::Rect;
use image::{Rgba, RgbaImage};

/// Inclusive-exclusive pixel span `(x0, y0, x1, y1)` covered by a rectangle
pub type PixelSpan = (u32, u32, u32, u32);

/// Headless drawing surface backed by an [`RgbaImage`]
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a surface; zero dimensions are raised to one pixel
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width.max(1), height.max(1)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Replace the backing buffer with one of a new size
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width.max(1), height.max(1)) != self.image.dimensions() {
            self.image = RgbaImage::new(width.max(1), height.max(1));
        }
    }

    /// Borrow the rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Fill the whole surface
    pub fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba(color);
        }
    }

    /// Read a pixel, `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Write a pixel, ignoring coordinates outside the surface
    pub fn put(&mut self, x: i64, y: i64, color: [u8; 4]) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = Rgba(color);
        }
    }

    /// Blend a color over a pixel with the given opacity
    pub fn blend(&mut self, x: i64, y: i64, color: [u8; 4], alpha: f64) {
        let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        let Some([r, g, b, a]) = self.pixel(px, py) else {
            return;
        };
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        let [cr, cg, cb, _] = color;
        self.put(
            x,
            y,
            [
                lerp_channel(r, cr, alpha),
                lerp_channel(g, cg, alpha),
                lerp_channel(b, cb, alpha),
                a,
            ],
        );
    }

    /// Blend a color over every pixel of a rectangle
    pub fn shade_rect(&mut self, rect: &Rect, color: [u8; 4], alpha: f64) {
        if let Some((x0, y0, x1, y1)) = self.pixel_span(rect) {
            for y in y0..y1 {
                for x in x0..x1 {
                    self.blend(i64::from(x), i64::from(y), color, alpha);
                }
            }
        }
    }

    fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut Rgba<u8>> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.image.get_pixel_mut_checked(x, y)
    }

    /// Pixels whose centers fall inside `rect`, clipped to the surface
    ///
    /// Returns `None` when nothing is visible.
    pub fn pixel_span(&self, rect: &Rect) -> Option<PixelSpan> {
        let clip = |value: f64, limit: u32| -> u32 {
            if value.is_nan() {
                0
            } else {
                value.round().clamp(0.0, f64::from(limit)) as u32
            }
        };
        let x0 = clip(rect.x, self.width());
        let y0 = clip(rect.y, self.height());
        let x1 = clip(rect.right(), self.width());
        let y1 = clip(rect.bottom(), self.height());
        (x1 > x0 && y1 > y0).then_some((x0, y0, x1, y1))
    }

    /// Fill a rectangle
    pub fn fill_rect(&mut self, rect: &Rect, color: [u8; 4]) {
        if let Some((x0, y0, x1, y1)) = self.pixel_span(rect) {
            for y in y0..y1 {
                for x in x0..x1 {
                    self.image.put_pixel(x, y, Rgba(color));
                }
            }
        }
    }

    /// Draw a one pixel outline just inside a rectangle
    pub fn stroke_rect(&mut self, rect: &Rect, color: [u8; 4]) {
        let Some((x0, y0, x1, y1)) = self.pixel_span(rect) else {
            return;
        };
        for x in x0..x1 {
            self.image.put_pixel(x, y0, Rgba(color));
            self.image.put_pixel(x, y1 - 1, Rgba(color));
        }
        for y in y0..y1 {
            self.image.put_pixel(x0, y, Rgba(color));
            self.image.put_pixel(x1 - 1, y, Rgba(color));
        }
    }

    /// Blend a disc over the surface with the given opacity
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: [u8; 4], alpha: f64) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        let bounds = Rect::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
        let Some((x0, y0, x1, y1)) = self.pixel_span(&bounds) else {
            return;
        };
        let radius_sq = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = f64::from(x) + 0.5 - cx;
                let dy = f64::from(y) + 0.5 - cy;
                if dx.mul_add(dx, dy * dy) <= radius_sq {
                    self.blend(i64::from(x), i64::from(y), color, alpha);
                }
            }
        }
    }
}
