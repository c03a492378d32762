//! Output encoding for exported images.
//!
//! This module provides:
//! - JPEG encoding with a 0.0-1.0 quality factor (alpha flattened onto black)
//! - Lossless RGBA PNG encoding
//! - [`OutputSpec`] and [`OutputFormat`] for choosing between them
//!
//! Encoding never touches metadata; EXIF carry-over runs afterwards on the
//! encoded bytes (see [`crate::metadata`]).

mod format;
mod jpeg;
mod png;

pub use format::{EncodedOutput, OutputFormat, OutputSpec};
pub use jpeg::{encode_jpeg, jpeg_quality};
pub use png::encode_png;

use crate::error::PipelineError;
use crate::surface::{Surface, CHANNELS};

/// Encode a surface as requested by `spec`.
///
/// # Errors
///
/// * `PipelineError::UnsupportedEncoding` - the requested type is not JPEG or PNG
/// * `PipelineError::Encode` - the encoder rejected the surface
pub fn encode(surface: &Surface, spec: &OutputSpec) -> Result<EncodedOutput, PipelineError> {
    let format = spec.output_format()?;

    let bytes = match format {
        OutputFormat::Jpeg => encode_jpeg(surface, spec.quality)?,
        OutputFormat::Png => encode_png(surface)?,
    };

    log::debug!(
        "Encoded {}x{} surface as {} ({} bytes)",
        surface.width,
        surface.height,
        format.mime(),
        bytes.len()
    );

    Ok(EncodedOutput { bytes, format })
}

fn validate_surface(surface: &Surface) -> Result<(), PipelineError> {
    if surface.width == 0 || surface.height == 0 {
        return Err(PipelineError::Encode(format!(
            "Invalid dimensions: width ({}) and height ({}) must be non-zero",
            surface.width, surface.height
        )));
    }

    let expected = surface.width as usize * surface.height as usize * CHANNELS;
    if surface.pixels.len() != expected {
        return Err(PipelineError::Encode(format!(
            "Invalid pixel data: expected {} bytes, got {}",
            expected,
            surface.pixels.len()
        )));
    }

    Ok(())
}
