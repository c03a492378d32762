//! Lossless PNG encoding.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::validate_surface;
use crate::error::PipelineError;
use crate::surface::Surface;

/// Encode a surface to RGBA PNG bytes. Transparency is preserved.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, PipelineError> {
    validate_surface(surface)?;

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            &surface.pixels,
            surface.width,
            surface.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| PipelineError::Encode(format!("PNG encoding failed: {}", e)))?;

    Ok(buffer)
}
