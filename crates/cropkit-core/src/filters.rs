//! Color filter algorithms
//!
//! Applies brightness, contrast and saturation to RGBA pixel data in a single
//! pass. Values are percentages where 100 leaves the image unchanged.
//!
//! ## Filter Order
//! 1. Brightness: `c * b`
//! 2. Contrast: `(c - 0.5) * k + 0.5`
//! 3. Saturation: `lum + s * (c - lum)`
//!
//! Each step's result is clamped to [0, 1] before the next one runs.
//! Alpha is never touched, and fully transparent pixels are skipped.

use crate::error::PipelineError;
use crate::luminance::calculate_luminance;
use crate::surface::CHANNELS;
use crate::ColorFilters;

/// Reject filter values the pipeline cannot apply.
///
/// Any finite, non-negative percentage is accepted; there is no upper bound.
pub fn validate_filters(filters: &ColorFilters) -> Result<(), PipelineError> {
    for (name, value) in [
        ("brightness", filters.brightness),
        ("contrast", filters.contrast),
        ("saturation", filters.saturation),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(PipelineError::InvalidFilter { name, value });
        }
    }
    Ok(())
}

/// Apply all color filters to RGBA pixel data in place.
///
/// # Example
/// ```
/// use cropkit_core::{ColorFilters, filters::apply_color_filters};
///
/// let mut pixels = vec![100, 100, 100, 255];
/// let filters = ColorFilters { brightness: 200.0, ..Default::default() };
///
/// apply_color_filters(&mut pixels, &filters);
/// assert_eq!(pixels, vec![200, 200, 200, 255]);
/// ```
pub fn apply_color_filters(pixels: &mut [u8], filters: &ColorFilters) {
    if filters.is_identity() {
        return;
    }

    let brightness = filters.brightness / 100.0;
    let contrast = filters.contrast / 100.0;
    let saturation = filters.saturation / 100.0;

    // Brightness and contrast act per channel, so fold them into a table.
    let mut table = [0.0f32; 256];
    for (value, entry) in table.iter_mut().enumerate() {
        let c = value as f32 / 255.0;
        let c = apply_brightness(c, brightness);
        *entry = apply_contrast(c, contrast);
    }

    for chunk in pixels.chunks_exact_mut(CHANNELS) {
        // Fully transparent pixels carry no color
        if chunk[3] == 0 {
            continue;
        }

        let r = table[chunk[0] as usize];
        let g = table[chunk[1] as usize];
        let b = table[chunk[2] as usize];

        let (r, g, b) = apply_saturation(r, g, b, saturation);

        chunk[0] = to_u8(r);
        chunk[1] = to_u8(g);
        chunk[2] = to_u8(b);
    }
}

/// Brightness multiplies every channel; 0 is black, 1 is unchanged.
#[inline]
fn apply_brightness(c: f32, amount: f32) -> f32 {
    (c * amount).clamp(0.0, 1.0)
}

/// Contrast scales the distance from mid gray; 0 is flat gray.
#[inline]
fn apply_contrast(c: f32, amount: f32) -> f32 {
    ((c - 0.5) * amount + 0.5).clamp(0.0, 1.0)
}

/// Saturation scales chroma around the pixel's own luminance; 0 is grayscale.
#[inline]
fn apply_saturation(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 1.0 {
        return (r, g, b);
    }
    let lum = calculate_luminance(r, g, b);
    (
        (lum + amount * (r - lum)).clamp(0.0, 1.0),
        (lum + amount * (g - lum)).clamp(0.0, 1.0),
        (lum + amount * (b - lum)).clamp(0.0, 1.0),
    )
}

#[inline]
fn to_u8(c: f32) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(brightness: f32, contrast: f32, saturation: f32) -> ColorFilters {
        ColorFilters {
            brightness,
            contrast,
            saturation,
        }
    }

    /// Helper to apply filters to a single opaque pixel
    fn apply(r: u8, g: u8, b: u8, f: &ColorFilters) -> [u8; 4] {
        let mut px = vec![r, g, b, 255];
        apply_color_filters(&mut px, f);
        [px[0], px[1], px[2], px[3]]
    }

    // ===== Identity Tests =====

    #[test]
    fn test_identity_leaves_pixels() {
        let mut pixels: Vec<u8> = (0..=255).flat_map(|v| [v, 255 - v, v / 2, 200]).collect();
        let expected = pixels.clone();
        apply_color_filters(&mut pixels, &ColorFilters::default());
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_near_identity_path_is_exact() {
        // Saturation off identity forces the full per-pixel path; brightness
        // and contrast at 100 must still round-trip exactly.
        for v in 0..=255u8 {
            let out = apply(v, v, v, &filters(100.0, 100.0, 50.0));
            assert_eq!(out, [v, v, v, 255], "gray {} should be unchanged", v);
        }
    }

    // ===== Brightness Tests =====

    #[test]
    fn test_brightness_doubles() {
        assert_eq!(apply(64, 32, 100, &filters(200.0, 100.0, 100.0)), [128, 64, 200, 255]);
    }

    #[test]
    fn test_brightness_zero_is_black() {
        assert_eq!(apply(200, 150, 100, &filters(0.0, 100.0, 100.0)), [0, 0, 0, 255]);
    }

    #[test]
    fn test_brightness_clips_at_white() {
        assert_eq!(apply(200, 200, 200, &filters(200.0, 100.0, 100.0)), [255, 255, 255, 255]);
    }

    #[test]
    fn test_brightness_accepts_values_above_caller_range() {
        // No internal clamp on the percentage itself
        assert_eq!(apply(10, 10, 10, &filters(1000.0, 100.0, 100.0)), [100, 100, 100, 255]);
    }

    // ===== Contrast Tests =====

    #[test]
    fn test_contrast_zero_is_mid_gray() {
        let out = apply(0, 128, 255, &filters(100.0, 0.0, 100.0));
        assert_eq!(out, [128, 128, 128, 255]);
    }

    #[test]
    fn test_contrast_increase_spreads_values() {
        let out = apply(64, 128, 192, &filters(100.0, 200.0, 100.0));
        assert!(out[0] < 64, "Dark pixel should get darker");
        assert!((out[1] as i32 - 128).abs() <= 1, "Mid pixel should stay near middle");
        assert!(out[2] > 192, "Bright pixel should get brighter");
    }

    #[test]
    fn test_contrast_decrease_pulls_to_middle() {
        let out = apply(0, 255, 0, &filters(100.0, 50.0, 100.0));
        assert_eq!(out[0], 64);
        assert_eq!(out[1], 191);
    }

    // ===== Saturation Tests =====

    #[test]
    fn test_saturation_zero_is_grayscale() {
        let out = apply(255, 0, 0, &filters(100.0, 100.0, 0.0));
        assert_eq!(out[0], out[1]);
        assert_eq!(out[1], out[2]);
        // 0.2126 * 255 = 54.2
        assert_eq!(out[0], 54);
    }

    #[test]
    fn test_saturation_keeps_gray() {
        assert_eq!(apply(90, 90, 90, &filters(100.0, 100.0, 200.0)), [90, 90, 90, 255]);
    }

    #[test]
    fn test_saturation_boost_moves_away_from_luminance() {
        let out = apply(150, 100, 100, &filters(100.0, 100.0, 200.0));
        assert!(out[0] > 150);
        assert!(out[1] < 100);
    }

    // ===== Combined =====

    #[test]
    fn test_bright_and_desaturated() {
        let out = apply(100, 150, 60, &filters(150.0, 100.0, 0.0));
        assert_eq!(out[0], out[1]);
        assert_eq!(out[1], out[2]);
        let lum = calculate_luminance(150.0 / 255.0, 225.0 / 255.0, 90.0 / 255.0);
        assert!((out[0] as f32 - lum * 255.0).abs() <= 1.0);
    }

    #[test]
    fn test_alpha_untouched() {
        let mut px = vec![10, 20, 30, 77, 40, 50, 60, 0];
        apply_color_filters(&mut px, &filters(150.0, 80.0, 20.0));
        assert_eq!(px[3], 77);
        assert_eq!(px[7], 0);
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let mut px = vec![0, 0, 0, 0];
        apply_color_filters(&mut px, &filters(100.0, 0.0, 100.0));
        assert_eq!(px, vec![0, 0, 0, 0]);
    }

    // ===== Validation =====

    #[test]
    fn test_validate_accepts_range_and_beyond() {
        assert!(validate_filters(&filters(0.0, 0.0, 0.0)).is_ok());
        assert!(validate_filters(&filters(200.0, 200.0, 200.0)).is_ok());
        assert!(validate_filters(&filters(350.0, 100.0, 100.0)).is_ok());
    }

    #[test]
    fn test_validate_rejects_negative() {
        assert_eq!(
            validate_filters(&filters(100.0, -1.0, 100.0)),
            Err(PipelineError::InvalidFilter {
                name: "contrast",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(matches!(
            validate_filters(&filters(100.0, 100.0, f32::NAN)),
            Err(PipelineError::InvalidFilter {
                name: "saturation",
                ..
            })
        ));
    }
}
