//! Frame-loop host: input events, scripts and the owned sketch context

/// Input events, scripts and double-click detection
pub mod input;
/// The running sketch
pub mod sketch;

pub use input::{InputEvent, InputScript};
pub use sketch::Sketch;
