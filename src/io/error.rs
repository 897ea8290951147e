//! Errors raised at the host boundary: reading inputs and writing frames
//!
//! Modes never fail. Every fallible operation sits in the host or IO layer and
//! reports through [`SketchError`].

use std::fmt;
use std::path::{Path, PathBuf};

/// Failure while preparing a run or exporting its frames
#[derive(Debug)]
pub enum SketchError {
    /// The image sample could not be decoded
    ImageLoad {
        /// Requested image
        path: PathBuf,
        /// Decoder error
        source: image::ImageError,
    },

    /// A PNG or GIF could not be encoded or written
    ImageExport {
        /// Output that was being written
        path: PathBuf,
        /// Encoder error
        source: image::ImageError,
    },

    /// Reading a script or preparing an output location failed
    FileSystem {
        /// File or directory involved
        path: PathBuf,
        /// What was being attempted, e.g. "read script"
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A command-line value is outside what a run accepts
    InvalidParameter {
        /// Argument name
        parameter: &'static str,
        /// Rejected value, as given
        value: String,
        /// Accepted range or rule
        reason: String,
    },

    /// An input script line could not be parsed
    Script {
        /// One-based line number in the script
        line: usize,
        /// What is wrong with the line
        reason: String,
    },
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Cannot load image sample '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Cannot write frames to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(f, "Failed to {operation} '{}': {source}", path.display()),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid --{parameter} '{value}': {reason}"),
            Self::Script { line, reason } => write!(f, "Input script line {line}: {reason}"),
        }
    }
}

impl std::error::Error for SketchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::Script { .. } => None,
        }
    }
}

/// Result alias used across the host and IO layers
pub type Result<T> = std::result::Result<T, SketchError>;

/// Build an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SketchError {
    SketchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Build a script error for the given one-based line
pub fn script_error(line: usize, reason: &impl ToString) -> SketchError {
    SketchError::Script {
        line,
        reason: reason.to_string(),
    }
}

/// Adapter for `map_err` that tags an I/O error with its path and operation
pub fn file_error(
    path: &Path,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> SketchError {
    let path = path.to_path_buf();
    move |source| SketchError::FileSystem {
        path,
        operation,
        source,
    }
}
