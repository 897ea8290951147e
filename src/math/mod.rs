//! Mathematical utilities for the sketch

/// Linear and smooth interpolation helpers
pub mod interpolation;
/// Seedable coherent value noise
pub mod noise;
