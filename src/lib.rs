//! Algorithm visualizations and divide-and-conquer generative art on a headless canvas
//!
//! A [`host::Sketch`] owns one visualization mode at a time (binary search,
//! quicksort, maze traversal, Life or generative art), feeds it input events
//! and drives one update-then-render pass per frame into an RGBA surface.
//! The command-line runner replays scripted input and exports PNG and GIF output.

#![forbid(unsafe_code)]

/// Divide-and-conquer generative art mode
pub mod art;
/// Frame-loop host, input events and scripts
pub mod host;
/// Input/output operations, configuration and error handling
pub mod io;
/// Interpolation helpers and coherent noise
pub mod math;
/// Visualization trait and the algorithm modes
pub mod modes;
/// Canvas, palettes, patterns and digit font
pub mod render;
/// Rectangles, grid layouts and the view transform
pub mod spatial;

pub use io::error::{Result, SketchError};
