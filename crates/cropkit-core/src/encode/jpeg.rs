//! JPEG encoding for export.
//!
//! JPEG has no alpha channel, so transparent canvas areas (the corners
//! uncovered by a rotation) are composited onto opaque black first.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::validate_surface;
use crate::error::PipelineError;
use crate::surface::{Surface, CHANNELS};

/// Map a 0.0-1.0 quality factor to the encoder's 1-100 scale.
pub fn jpeg_quality(quality: f32) -> u8 {
    let quality = if quality.is_finite() { quality } else { 1.0 };
    (quality.clamp(0.0, 1.0) * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Encode a surface to JPEG bytes.
///
/// # Arguments
///
/// * `surface` - RGBA surface to encode
/// * `quality` - Quality factor from 0.0 to 1.0 (1.0 = highest quality)
///
/// # Errors
///
/// Returns `PipelineError::Encode` if the surface is malformed or the encoder
/// fails.
pub fn encode_jpeg(surface: &Surface, quality: f32) -> Result<Vec<u8>, PipelineError> {
    validate_surface(surface)?;

    let rgb = flatten_onto_black(&surface.pixels);
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, jpeg_quality(quality));

    encoder
        .write_image(&rgb, surface.width, surface.height, ExtendedColorType::Rgb8)
        .map_err(|e| PipelineError::Encode(format!("JPEG encoding failed: {}", e)))?;

    Ok(buffer.into_inner())
}

/// Drop alpha by compositing over black: `c * a / 255`.
fn flatten_onto_black(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / CHANNELS * 3);
    for px in rgba.chunks_exact(CHANNELS) {
        let a = px[3] as u32;
        for &c in &px[..3] {
            rgb.push(((c as u32 * a + 127) / 255) as u8);
        }
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_support::solid;
    use proptest::prelude::*;

    proptest! {
        /// Property: Encoding always produces a decodable JPEG of the same size.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            width in 1u32..=40,
            height in 1u32..=40,
            quality in 0.0f32..=1.0,
            shade in any::<u8>(),
        ) {
            let jpeg = encode_jpeg(&solid(width, height, [shade, shade, shade, 255]), quality).unwrap();
            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

            let decoded = image::load_from_memory(&jpeg).unwrap();
            prop_assert_eq!((decoded.width(), decoded.height()), (width, height));
        }

        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            width in 1u32..=20,
            height in 1u32..=20,
            quality in 0.0f32..=1.0,
        ) {
            let img = solid(width, height, [100, 150, 200, 255]);
            prop_assert_eq!(encode_jpeg(&img, quality).unwrap(), encode_jpeg(&img, quality).unwrap());
        }
    }
}
