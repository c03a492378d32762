//! Error types for the export pipeline.

use thiserror::Error;

/// Errors that abort an export.
///
/// Metadata problems are deliberately absent: they are reported through
/// [`crate::metadata::MetadataError`] and never stop an export.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    /// The source bytes (or data URL) could not be decoded.
    #[error("Could not load image: {0}")]
    ImageLoad(String),

    /// The crop window does not fit inside the rotated canvas.
    #[error(
        "Invalid crop region {width}x{height} at ({x}, {y}) for a {canvas_width}x{canvas_height} canvas"
    )]
    InvalidCropRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },

    /// The requested output encoding is not supported.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// A color filter percentage is negative or not a finite number.
    #[error("Invalid {name} filter value: {value}")]
    InvalidFilter { name: &'static str, value: f32 },

    /// The codec rejected an otherwise valid surface.
    #[error("Encoding failed: {0}")]
    Encode(String),
}
