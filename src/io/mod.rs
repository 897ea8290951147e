//! Input/output operations, configuration and error handling

/// Command-line interface and the run loop
pub mod cli;
/// Compile-time constants
pub mod configuration;
/// Error type shared by the IO boundary
pub mod error;
/// Image sample loading and PNG export
pub mod image;
/// Terminal progress display
pub mod progress;
/// GIF capture of rendered frames
pub mod visualization;
