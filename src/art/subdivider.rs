//! Recursive divide-and-conquer subdivision of a root region
//!
//! Every split consumes one unit of the depth budget, so the recursion depth
//! is bounded by the initial budget no matter what the noise field returns.
//! The subdivider only decides geometry; coloring happens in the leaf painter.

use crate::io::configuration::{
    ASPECT_FORCE_SPLIT, BRIGHTNESS_STD_THRESHOLD, EARLY_STOP_MAX, EARLY_STOP_MIN_LEVEL,
    EARLY_STOP_SLOPE, GOLDEN_RATIO_SPLIT, MIN_CELL_SIZE, NOISE_LEVEL_STEP, NOISE_SCALE,
    RATIO_JITTER, SPLIT_RATIO_MAX, SPLIT_RATIO_MIN,
};
use crate::io::image::ImageSample;
use crate::math::interpolation::{lerp, segment, smoothstep};
use crate::math::noise::ValueNoise;
use crate::spatial::rect::{Rect, SplitAxis};

// Offsets decorrelating the noise lookups that drive a single split
const AXIS_CHANNEL: f64 = 0.0;
const SELECTOR_CHANNEL: f64 = 17.3;
const CONTINUOUS_CHANNEL: f64 = 41.9;
const JITTER_CHANNEL: f64 = 73.1;
const SECOND_RATIO_CHANNEL: f64 = 109.7;

/// Terminal cell of a subdivision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaf {
    /// Region in world coordinates
    pub rect: Rect,
    /// Recursion level, zero for the root
    pub level: u32,
}

/// Why a region was not split further
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// Depth budget exhausted
    DepthExhausted,
    /// A side is below the minimum cell size
    TooSmall,
    /// The image sample is flat over the region
    FlatImage,
    /// Probabilistic early stop
    EarlyStop,
}

/// Parameters of one subdivision pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubdivisionParams {
    /// Split into four children instead of two
    pub quad: bool,
    /// Initial depth budget
    pub max_depth: u32,
    /// Requested gap between siblings
    pub gutter: f64,
    /// Animation time fed to the noise third axis
    pub time: f64,
    /// Whether an available image sample drives stopping
    pub image_mode: bool,
}

/// Recursive subdivider over a root region
pub struct Subdivider<'a> {
    noise: &'a ValueNoise,
    root: Rect,
    params: SubdivisionParams,
    sample: Option<&'a ImageSample>,
}

impl<'a> Subdivider<'a> {
    pub const fn new(noise: &'a ValueNoise, root: Rect, params: SubdivisionParams) -> Self {
        Self {
            noise,
            root,
            params,
            sample: None,
        }
    }

    /// Attach the optional image sample
    ///
    /// The sample only takes part when image mode is on; without one the
    /// image stopping rule never fires.
    #[must_use]
    pub const fn with_sample(mut self, sample: Option<&'a ImageSample>) -> Self {
        self.sample = sample;
        self
    }

    /// Subdivide the root and collect the leaves in drawing order
    pub fn leaves(&self) -> Vec<Leaf> {
        let mut leaves = Vec::new();
        self.subdivide(self.root, self.params.max_depth, 0, &mut leaves);
        leaves
    }

    /// Either record `rect` as a leaf or split it and recurse into the children
    pub fn subdivide(&self, rect: Rect, depth_left: u32, level: u32, leaves: &mut Vec<Leaf>) {
        if self.stop_reason(&rect, depth_left, level).is_some() {
            leaves.push(Leaf { rect, level });
            return;
        }

        let children = if self.params.quad {
            let ratio_x = self.split_ratio(&rect, level, 0.0);
            let ratio_y = self.split_ratio(&rect, level, SECOND_RATIO_CHANNEL);
            rect.split_quad(ratio_x, ratio_y, self.params.gutter)
        } else {
            let axis = self.split_axis(&rect, level);
            let ratio = self.split_ratio(&rect, level, 0.0);
            let (first, second, _) = rect.split(axis, ratio, self.params.gutter);
            vec![first, second]
        };

        if children.is_empty() {
            leaves.push(Leaf { rect, level });
            return;
        }

        for child in children {
            self.subdivide(child, depth_left - 1, level + 1, leaves);
        }
    }

    /// First stopping rule that applies to `rect`, if any
    pub fn stop_reason(&self, rect: &Rect, depth_left: u32, level: u32) -> Option<StopReason> {
        if depth_left == 0 {
            return Some(StopReason::DepthExhausted);
        }
        if rect.width < MIN_CELL_SIZE || rect.height < MIN_CELL_SIZE {
            return Some(StopReason::TooSmall);
        }
        if let Some(sample) = self.sample.filter(|_| self.params.image_mode) {
            // Image detail alone decides where image-driven subdivision stops
            let (u0, v0, u1, v1) = rect.normalized_within(&self.root);
            if sample.brightness_std(u0, v0, u1, v1) < BRIGHTNESS_STD_THRESHOLD {
                return Some(StopReason::FlatImage);
            }
            return None;
        }
        let chance = early_stop_probability(level);
        if chance > 0.0 && self.region_hash(rect, level) < chance {
            return Some(StopReason::EarlyStop);
        }
        None
    }

    /// Cut direction for a binary split of `rect`
    pub fn split_axis(&self, rect: &Rect, level: u32) -> SplitAxis {
        let aspect = rect.aspect_ratio();
        if aspect > ASPECT_FORCE_SPLIT {
            SplitAxis::Vertical
        } else if aspect < 1.0 / ASPECT_FORCE_SPLIT {
            SplitAxis::Horizontal
        } else if self.noise_at(rect, level, AXIS_CHANNEL) > 0.5 {
            SplitAxis::Vertical
        } else {
            SplitAxis::Horizontal
        }
    }

    /// Split ratio for `rect`, always within the ratio clamp
    ///
    /// `channel` offsets every lookup so quad splits get two independent ratios.
    pub fn split_ratio(&self, rect: &Rect, level: u32, channel: f64) -> f64 {
        let selector = self.noise_at(rect, level, channel + SELECTOR_CHANNEL);
        let continuous = self.noise_at(rect, level, channel + CONTINUOUS_CHANNEL);
        let jitter = self.noise_at(rect, level, channel + JITTER_CHANNEL);
        blend_ratio(selector, continuous, jitter)
    }

    fn noise_at(&self, rect: &Rect, level: u32, channel: f64) -> f64 {
        let (cx, cy) = rect.center();
        self.noise.sample(
            cx.mul_add(NOISE_SCALE, channel),
            cy.mul_add(NOISE_SCALE, channel * 0.5),
            f64::from(level).mul_add(NOISE_LEVEL_STEP, self.params.time),
        )
    }

    // Stable per-region coin so a static frame always stops at the same cells
    fn region_hash(&self, rect: &Rect, level: u32) -> f64 {
        let quantize = |value: f64| (value * 4.0).round() as i64;
        self.noise.hash01(
            quantize(rect.x),
            quantize(rect.y),
            (i64::from(level) << 32) ^ quantize(rect.width) ^ (quantize(rect.height) << 16),
        )
    }
}

/// Blend the even, golden and continuous split candidates into one ratio
///
/// `selector` walks from the even split through the golden split to the
/// continuous candidate with smoothstep transitions. `jitter` perturbs the
/// result by at most half of `RATIO_JITTER` either way before clamping to
/// `[SPLIT_RATIO_MIN, SPLIT_RATIO_MAX]`. Non-finite inputs are treated as 0.5.
pub fn blend_ratio(selector: f64, continuous: f64, jitter: f64) -> f64 {
    let finite = |value: f64| if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.5 };
    let candidates = [0.5, GOLDEN_RATIO_SPLIT, lerp(0.2, 0.8, finite(continuous))];

    let (index, fraction) = segment(finite(selector), candidates.len());
    let low = candidates.get(index).copied().unwrap_or(0.5);
    let high = candidates.get(index + 1).copied().unwrap_or(low);
    let blended = lerp(low, high, smoothstep(fraction));

    let perturbed = (finite(jitter) - 0.5).mul_add(RATIO_JITTER, blended);
    perturbed.clamp(SPLIT_RATIO_MIN, SPLIT_RATIO_MAX)
}

/// Chance that a region at `level` stops early
///
/// Zero below `EARLY_STOP_MIN_LEVEL`, then growing linearly with the level up
/// to `EARLY_STOP_MAX`.
pub fn early_stop_probability(level: u32) -> f64 {
    if level < EARLY_STOP_MIN_LEVEL {
        return 0.0;
    }
    (f64::from(level - 1) * EARLY_STOP_SLOPE).min(EARLY_STOP_MAX)
}
