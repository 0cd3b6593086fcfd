//! Error types for raster-lab operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in raster-lab operations.
///
/// The rasterizers themselves never fail for finite input; these errors come
/// from the checked entry points, rendering surfaces, encoders and config.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or render target.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Non-finite or out-of-range geometric input.
    #[error("Invalid input: {field} = {value}")]
    InvalidInput {
        /// Name of the offending parameter.
        field: &'static str,
        /// Offending value, rendered as text.
        value: String,
    },

    /// Unrecognized algorithm identifier.
    #[error("Unknown algorithm: {0} (expected one of step, dda, bresenham, circle, bezier, wu)")]
    UnknownAlgorithm(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration file could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number reported by the YAML parser (0 when unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Rendering error.
    #[error("Rendering error: {0}")]
    Rendering(String),
}

impl Error {
    /// Build an [`Error::InvalidInput`] for a numeric parameter.
    pub(crate) fn invalid_input(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidInput { field, value: value.to_string() }
    }
}
