//! The export pipeline: one call from the final cropper state to file bytes.

use serde::{Deserialize, Serialize};

use crate::decode::SourceImage;
use crate::encode::{self, EncodedOutput, OutputSpec};
use crate::error::PipelineError;
use crate::filters::validate_filters;
use crate::metadata;
use crate::transform::{canvas_size, crop_region, render_rotated, CropRegion};
use crate::{ColorFilters, Transform};

/// Everything the cropper UI hands over when the user exports.
///
/// Deserializes from a camelCase object; every field except `crop` may be
/// omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportParams {
    /// Crop window in rotated-canvas pixels
    pub crop: CropRegion,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default)]
    pub filters: ColorFilters,
    #[serde(default)]
    pub output: OutputSpec,
}

impl ExportParams {
    /// Parameters that export `crop` with no rotation, flips or filters.
    pub fn new(crop: CropRegion) -> Self {
        Self {
            crop,
            transform: Transform::default(),
            filters: ColorFilters::default(),
            output: OutputSpec::default(),
        }
    }
}

/// Run the full pipeline on a loaded source.
///
/// Stages, in order: validate parameters against the rotated canvas, render
/// the rotated and filtered source, crop, encode, then carry the original
/// EXIF block over (JPEG only, best effort). The source is only borrowed.
///
/// # Errors
///
/// * `PipelineError::InvalidFilter` - a filter value is negative or not finite
/// * `PipelineError::InvalidCropRegion` - the crop does not fit the rotated canvas
/// * `PipelineError::UnsupportedEncoding` - the output type is not JPEG or PNG
/// * `PipelineError::Encode` - the encoder failed
pub fn export(source: &SourceImage, params: &ExportParams) -> Result<EncodedOutput, PipelineError> {
    validate_filters(&params.filters)?;
    params.output.output_format()?;

    // Fail before paying for a render
    let (canvas_w, canvas_h) =
        canvas_size(source.width(), source.height(), params.transform.rotation);
    params.crop.validate(canvas_w, canvas_h)?;

    let canvas = render_rotated(source.raster(), &params.transform, &params.filters);
    let cropped = crop_region(&canvas, &params.crop)?;
    drop(canvas);

    let EncodedOutput { bytes, format } = encode::encode(&cropped, &params.output)?;
    let bytes = metadata::carry_over(source.bytes(), bytes, format.mime());

    log::debug!(
        "Exported {}x{} crop of {}x{} source as {}",
        cropped.width,
        cropped.height,
        source.width(),
        source.height(),
        format.mime()
    );

    Ok(EncodedOutput { bytes, format })
}

/// Name for the downloaded file: `<base>-cropped.<ext>`.
///
/// Names without an extension become `<name>-cropped`.
pub fn download_file_name(original_name: &str) -> String {
    let name = original_name.trim();
    if name.is_empty() {
        return "image-cropped".to_string();
    }

    match name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() && !ext.is_empty() => {
            format!("{}-cropped.{}", base, ext)
        }
        _ => format!("{}-cropped", name),
    }
}
