//! Cropkit Core - Crop, rotate and color-adjust images for export
//!
//! This crate provides the export pipeline behind the Cropkit cropper:
//! rotation bounding-box math, rendering onto a rotated canvas, exact pixel
//! cropping, color filters, encoding and EXIF carry-over for JPEG output.
//!
//! # Pipeline
//!
//! 1. Size a canvas that holds the whole image after rotation
//! 2. Render the rotated, flipped and filtered source onto it
//! 3. Copy the crop window into a tightly sized surface
//! 4. Encode, then splice the original EXIF block back in (JPEG only)
//!
//! The single entry point is [`export`], called once with the final
//! parameter snapshot from the UI.

pub mod decode;
pub mod encode;
pub mod error;
pub mod filters;
pub mod luminance;
pub mod metadata;
pub mod pipeline;
pub mod surface;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_support;

pub use decode::SourceImage;
pub use encode::{EncodedOutput, OutputFormat, OutputSpec};
pub use error::PipelineError;
pub use pipeline::{download_file_name, export, ExportParams};
pub use surface::Surface;
pub use transform::{canvas_size, rotated_size, AspectRatio, CropRegion};

/// Color filters applied while rendering.
///
/// Each value is a percentage where 100 leaves the image unchanged. The UI
/// offers 0 to 200; the pipeline applies any finite, non-negative value
/// without clamping it.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorFilters {
    /// Brightness percentage (100 = unchanged, 0 = black)
    pub brightness: f32,
    /// Contrast percentage (100 = unchanged, 0 = flat gray)
    pub contrast: f32,
    /// Saturation percentage (100 = unchanged, 0 = grayscale)
    pub saturation: f32,
}

impl Default for ColorFilters {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            contrast: 100.0,
            saturation: 100.0,
        }
    }
}

impl ColorFilters {
    /// Create identity filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if these filters leave pixels unchanged
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Geometric transform chosen in the cropper.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transform {
    /// Rotation in degrees, clockwise. Any real value; taken modulo 360.
    pub rotation: f64,
    /// Mirror left to right
    pub flip_horizontal: bool,
    /// Mirror top to bottom
    pub flip_vertical: bool,
}

impl Transform {
    /// A rotation without flips
    pub fn rotation(degrees: f64) -> Self {
        Self {
            rotation: degrees,
            ..Self::default()
        }
    }

    /// Check if this transform leaves the image in place
    pub fn is_identity(&self) -> bool {
        !self.flip_horizontal && !self.flip_vertical && self.rotation % 360.0 == 0.0
    }
}
