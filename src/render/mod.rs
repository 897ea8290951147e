//! Raster drawing primitives shared by every mode

/// RGBA drawing surface
pub mod canvas;
/// Bitmap font for labels and help text
pub mod font;
/// Translucent help overlay
pub mod overlay;
/// Named palettes and palette interpolation
pub mod palette;
/// Procedural leaf overlay patterns
pub mod pattern;

pub use canvas::Canvas;
pub use palette::Palette;
pub use pattern::Pattern;
