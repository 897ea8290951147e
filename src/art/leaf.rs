//! Fill, pattern, outline and label of terminal subdivision cells

use crate::art::subdivider::Leaf;
use crate::io::configuration::{NOISE_LEVEL_STEP, NOISE_SCALE, PALETTE_NOISE};
use crate::io::image::ImageSample;
use crate::math::interpolation::inverse_lerp;
use crate::math::noise::ValueNoise;
use crate::render::canvas::Canvas;
use crate::render::font::{draw_number, text_size};
use crate::render::palette::{Palette, contrast_color};
use crate::render::pattern::Pattern;
use crate::spatial::rect::Rect;
use crate::spatial::view::ViewTransform;

const OUTLINE_COLOR: [u8; 4] = [14, 14, 18, 255];
const PATTERN_ALPHA: f64 = 0.35;
// Single-octave noise clusters around 0.5; stretch it so every pattern shows up
const PATTERN_STRETCH: f64 = 2.5;
const LABEL_PADDING: f64 = 3.0;

/// Resolved appearance of a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafStyle {
    /// Fill color
    pub fill: [u8; 4],
    /// Overlay pattern
    pub pattern: Pattern,
}

/// Which optional decorations the painter draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
// Each flag is an independent art mode toggle
#[allow(clippy::struct_excessive_bools)]
pub struct Decorations {
    /// Overlay procedural patterns
    pub patterns: bool,
    /// Outline each leaf
    pub outline: bool,
    /// Print the recursion level
    pub labels: bool,
    /// Color from the image sample when one is loaded
    pub image_colors: bool,
}

/// Paints leaves produced by one subdivision pass
pub struct LeafPainter<'a> {
    noise: &'a ValueNoise,
    palette: &'a Palette,
    root: Rect,
    max_depth: u32,
    time: f64,
    decorations: Decorations,
    sample: Option<&'a ImageSample>,
}

impl<'a> LeafPainter<'a> {
    pub const fn new(
        noise: &'a ValueNoise,
        palette: &'a Palette,
        root: Rect,
        max_depth: u32,
        time: f64,
        decorations: Decorations,
    ) -> Self {
        Self {
            noise,
            palette,
            root,
            max_depth,
            time,
            decorations,
            sample: None,
        }
    }

    /// Attach the optional image sample used for fill colors
    #[must_use]
    pub const fn with_sample(mut self, sample: Option<&'a ImageSample>) -> Self {
        self.sample = sample;
        self
    }

    /// Fill color and pattern for a leaf
    pub fn style(&self, leaf: &Leaf) -> LeafStyle {
        LeafStyle {
            fill: self.fill_color(leaf),
            pattern: self.pattern(leaf),
        }
    }

    /// Image average over the leaf in image mode, palette color otherwise
    ///
    /// Image mode without a loaded sample falls back to the palette.
    pub fn fill_color(&self, leaf: &Leaf) -> [u8; 4] {
        if self.decorations.image_colors {
            if let Some(sample) = self.sample {
                let (u0, v0, u1, v1) = leaf.rect.normalized_within(&self.root);
                return sample.average_color(u0, v0, u1, v1);
            }
        }
        self.palette.interpolate(self.palette_position(leaf))
    }

    /// Leaf level as a fraction of the depth budget
    pub fn depth_fraction(&self, leaf: &Leaf) -> f64 {
        inverse_lerp(0.0, f64::from(self.max_depth.max(1)), f64::from(leaf.level))
    }

    /// Palette lookup position: normalized depth plus a small noise offset
    pub fn palette_position(&self, leaf: &Leaf) -> f64 {
        let depth = self.depth_fraction(leaf);
        let offset = (self.noise_at(leaf, 5.3) - 0.5) * PALETTE_NOISE;
        (depth + offset).clamp(0.0, 1.0)
    }

    /// Overlay pattern for a leaf, [`Pattern::None`] when patterns are off
    pub fn pattern(&self, leaf: &Leaf) -> Pattern {
        if !self.decorations.patterns {
            return Pattern::None;
        }
        let (cx, cy) = leaf.rect.center();
        let raw = self.noise.single(
            cx.mul_add(NOISE_SCALE, 91.7),
            cy.mul_add(NOISE_SCALE, -13.1),
            f64::from(leaf.level).mul_add(0.51, self.time * 0.5),
        );
        Pattern::from_unit((raw - 0.5).mul_add(PATTERN_STRETCH, 0.5))
    }

    /// Draw a leaf through the view transform
    pub fn paint(&self, canvas: &mut Canvas, leaf: &Leaf, view: &ViewTransform) {
        let style = self.style(leaf);
        let screen = view.rect_to_screen(&leaf.rect);
        canvas.fill_rect(&screen, style.fill);

        let ink = contrast_color(style.fill);
        let spacing = style.pattern.spacing(self.depth_fraction(leaf)) * view.scale();
        style.pattern.draw(canvas, &screen, spacing, ink, PATTERN_ALPHA);

        if self.decorations.outline {
            canvas.stroke_rect(&screen, OUTLINE_COLOR);
        }

        if self.decorations.labels {
            let scale = if screen.min_side() >= 48.0 { 2 } else { 1 };
            let (text_w, text_h) = text_size(u64::from(leaf.level), scale);
            let fits = screen.width >= f64::from(text_w) + LABEL_PADDING * 2.0
                && screen.height >= f64::from(text_h) + LABEL_PADDING * 2.0;
            if fits {
                draw_number(
                    canvas,
                    (screen.x + LABEL_PADDING).round() as i64,
                    (screen.y + LABEL_PADDING).round() as i64,
                    u64::from(leaf.level),
                    scale,
                    ink,
                );
            }
        }
    }

    fn noise_at(&self, leaf: &Leaf, channel: f64) -> f64 {
        let (cx, cy) = leaf.rect.center();
        self.noise.sample(
            cx.mul_add(NOISE_SCALE, channel),
            cy.mul_add(NOISE_SCALE, channel),
            f64::from(leaf.level).mul_add(NOISE_LEVEL_STEP, self.time),
        )
    }
}
