//! Spatial data structures for the sketch
//!
//! This module contains spatial-related functionality including:
//! - Rectangle regions and their binary/quad splits
//! - Cell grid layouts for the grid-based modes
//! - The pan/zoom view transform

/// Cell grid layout utilities
pub mod grid;
/// Rectangle regions and splitting
pub mod rect;
/// Pan and zoom view transform
pub mod view;

pub use grid::GridLayout;
pub use rect::{Rect, SplitAxis};
pub use view::ViewTransform;
