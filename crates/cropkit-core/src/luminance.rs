//! Luminance weights shared by the saturation filter.
//!
//! The saturate filter scales each channel's distance from the pixel's own
//! luminance, so gray stays gray and saturation 0 yields this luminance.

/// Rec. 709 red weight
pub const LUMINANCE_R: f32 = 0.2126;
/// Rec. 709 green weight
pub const LUMINANCE_G: f32 = 0.7152;
/// Rec. 709 blue weight
pub const LUMINANCE_B: f32 = 0.0722;

/// Weighted sum of the channels. Linear, so any channel scale works.
#[inline]
pub fn calculate_luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((LUMINANCE_R + LUMINANCE_G + LUMINANCE_B - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_byte_scale() {
        assert!((calculate_luminance(255.0, 255.0, 255.0) - 255.0).abs() < 1e-3);
        assert!((calculate_luminance(255.0, 0.0, 0.0) - 54.213).abs() < 1e-3);
    }

    #[test]
    fn test_luminance_gray_preserves_value() {
        for v in [0.0f32, 0.25, 0.5, 0.75, 1.0] {
            assert!((calculate_luminance(v, v, v) - v).abs() < 1e-6);
        }
    }

    #[test]
    fn test_green_dominates() {
        let r = calculate_luminance(1.0, 0.0, 0.0);
        let g = calculate_luminance(0.0, 1.0, 0.0);
        let b = calculate_luminance(0.0, 0.0, 1.0);
        assert!(g > r && r > b);
    }
}
