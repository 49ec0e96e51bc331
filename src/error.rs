//! Error types for pixelwalk operations.
//!
//! The algorithms themselves are total functions and never return these;
//! errors only come from constructing validated inputs, parsing algorithm
//! names and loading configuration.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pixelwalk operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Clip window bounds are inverted or not finite.
    #[error("Invalid clip window: ({xmin}, {ymin})-({xmax}, {ymax})")]
    InvalidWindow {
        /// Left bound.
        xmin: f64,
        /// Bottom bound.
        ymin: f64,
        /// Right bound.
        xmax: f64,
        /// Top bound.
        ymax: f64,
    },

    /// Algorithm name did not match any known rasterizer or clipper.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },
}
