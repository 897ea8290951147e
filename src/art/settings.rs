//! Art mode toggles and the single-key commands that drive them

use crate::io::configuration::{
    AUTO_DEPTH_SECONDS, DEFAULT_MANUAL_DEPTH, GUTTER_SIZE, MAX_DEPTH, MIN_CELL_SIZE,
};
use crate::render::palette::Palette;
use crate::spatial::rect::Rect;

/// Command bound to a single key in the art mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtCommand {
    /// Switch between binary and quad splits
    ToggleQuad,
    /// Advance to the next named palette
    CyclePalette,
    /// Start or freeze the noise animation
    ToggleAnimate,
    /// Switch between automatic and manual depth
    ToggleAutoDepth,
    /// Increase the manual depth budget
    Deeper,
    /// Decrease the manual depth budget
    Shallower,
    /// Show or hide the gutter between siblings
    ToggleGutter,
    /// Show or hide leaf outlines
    ToggleOutline,
    /// Show or hide overlay patterns
    TogglePatterns,
    /// Show or hide depth labels
    ToggleLabels,
    /// Switch image-driven subdivision, which also selects quad splits
    ToggleImageMode,
    /// Switch between image average colors and the palette in image mode
    ToggleImageColors,
    /// Draw a fresh noise seed
    Reseed,
    /// Restore the identity view
    ResetView,
}

impl ArtCommand {
    /// Command bound to `key`, if any
    pub const fn from_key(key: char) -> Option<Self> {
        Some(match key {
            'q' => Self::ToggleQuad,
            'p' => Self::CyclePalette,
            'a' => Self::ToggleAnimate,
            'd' => Self::ToggleAutoDepth,
            '+' | '=' => Self::Deeper,
            '-' | '_' => Self::Shallower,
            'g' => Self::ToggleGutter,
            'o' => Self::ToggleOutline,
            't' => Self::TogglePatterns,
            'l' => Self::ToggleLabels,
            'i' => Self::ToggleImageMode,
            'c' => Self::ToggleImageColors,
            's' => Self::Reseed,
            'v' => Self::ResetView,
            _ => return None,
        })
    }
}

/// Toggles and parameters of the art mode
#[derive(Debug, Clone, PartialEq, Eq)]
// Each flag maps to an independent key toggle
#[allow(clippy::struct_excessive_bools)]
pub struct ArtSettings {
    /// Split into four children instead of two
    pub quad: bool,
    /// Index into the named palettes
    pub palette_index: usize,
    /// Advance noise time every frame
    pub animate: bool,
    /// Derive the depth budget from the root size
    pub auto_depth: bool,
    /// Depth budget used when `auto_depth` is off
    pub manual_depth: u32,
    /// Reserve a gap between siblings
    pub gutter: bool,
    /// Outline every leaf
    pub outline: bool,
    /// Overlay procedural patterns on leaves
    pub patterns: bool,
    /// Print the recursion level inside leaves
    pub labels: bool,
    /// Let the image sample drive stopping
    pub image_mode: bool,
    /// Fill leaves with the image average while in image mode
    pub image_colors: bool,
}

impl Default for ArtSettings {
    fn default() -> Self {
        Self {
            quad: false,
            palette_index: 0,
            animate: true,
            auto_depth: true,
            manual_depth: DEFAULT_MANUAL_DEPTH,
            gutter: true,
            outline: false,
            patterns: true,
            labels: false,
            image_mode: false,
            image_colors: false,
        }
    }
}

impl ArtSettings {
    /// Apply a settings command
    ///
    /// Returns `false` for commands that do not touch the settings
    /// ([`ArtCommand::Reseed`], [`ArtCommand::ResetView`]).
    pub fn apply(&mut self, command: ArtCommand) -> bool {
        match command {
            ArtCommand::ToggleQuad => self.quad = !self.quad,
            ArtCommand::CyclePalette => {
                self.palette_index = (self.palette_index + 1) % Palette::count();
            }
            ArtCommand::ToggleAnimate => self.animate = !self.animate,
            ArtCommand::ToggleAutoDepth => self.auto_depth = !self.auto_depth,
            ArtCommand::Deeper => self.manual_depth = (self.manual_depth + 1).min(MAX_DEPTH),
            ArtCommand::Shallower => self.manual_depth = self.manual_depth.saturating_sub(1).max(1),
            ArtCommand::ToggleGutter => self.gutter = !self.gutter,
            ArtCommand::ToggleOutline => self.outline = !self.outline,
            ArtCommand::TogglePatterns => self.patterns = !self.patterns,
            ArtCommand::ToggleLabels => self.labels = !self.labels,
            ArtCommand::ToggleImageMode => {
                self.image_mode = !self.image_mode;
                if self.image_mode {
                    self.quad = true;
                }
            }
            ArtCommand::ToggleImageColors => self.image_colors = !self.image_colors,
            ArtCommand::Reseed | ArtCommand::ResetView => return false,
        }
        true
    }

    /// Palette selected by `palette_index`
    pub fn palette(&self) -> &'static Palette {
        Palette::by_index(self.palette_index)
    }

    /// Gap reserved between siblings
    pub const fn gutter_size(&self) -> f64 {
        if self.gutter { GUTTER_SIZE } else { 0.0 }
    }

    /// Whether leaves take the image average color
    ///
    /// Only meaningful with a loaded sample; the painter falls back otherwise.
    pub const fn fills_from_image(&self) -> bool {
        self.image_mode && self.image_colors
    }

    /// Deepest level the current settings can reach on `root`
    pub fn depth_limit(&self, root: &Rect) -> u32 {
        if self.auto_depth {
            auto_depth(root, self.quad)
        } else {
            self.manual_depth.clamp(1, MAX_DEPTH)
        }
    }

    /// Depth budget for subdividing `root` after `seconds` of running time
    ///
    /// In auto mode the budget climbs one level per `AUTO_DEPTH_SECONDS` from
    /// zero up to [`Self::depth_limit`], then wraps.
    pub fn depth_for(&self, root: &Rect, seconds: f64) -> u32 {
        let limit = self.depth_limit(root);
        if !self.auto_depth {
            return limit;
        }
        let steps = seconds / AUTO_DEPTH_SECONDS;
        if !steps.is_finite() || steps < 0.0 {
            return 0;
        }
        (steps.floor() as u64 % (u64::from(limit) + 1)) as u32
    }
}

/// Depth needed for cells of `root` to reach the minimum cell size
///
/// Binary splits halve one side per level, so they need twice the levels of
/// quad splits. The result is clamped to `[1, MAX_DEPTH]`.
pub fn auto_depth(root: &Rect, quad: bool) -> u32 {
    let side = root.min_side();
    if !(side.is_finite() && side > MIN_CELL_SIZE) {
        return 1;
    }
    let halvings = (side / MIN_CELL_SIZE).log2().ceil() as u32;
    let levels = if quad { halvings } else { halvings * 2 };
    levels.clamp(1, MAX_DEPTH)
}
