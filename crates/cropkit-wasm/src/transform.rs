//! WASM bindings for crop geometry helpers used by the cropper UI.

use cropkit_core::{canvas_size, download_file_name, AspectRatio, CropRegion};
use wasm_bindgen::prelude::*;

/// Size of the canvas that holds the image rotated by `degrees`.
///
/// Returns `[width, height]`. Crop coordinates passed to `export_image` are
/// in this space.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const [w, h] = rotated_canvas_size(800, 600, 90); // [600, 800]
/// ```
#[wasm_bindgen]
pub fn rotated_canvas_size(width: u32, height: u32, degrees: f64) -> Vec<u32> {
    let (w, h) = canvas_size(width, height, degrees);
    vec![w, h]
}

/// Download name for an export of `original_name`, e.g. `photo-cropped.jpg`.
#[wasm_bindgen]
pub fn cropped_file_name(original_name: &str) -> String {
    download_file_name(original_name)
}

/// Default crop viewport on a canvas for an aspect preset and zoom factor.
///
/// `aspect` is one of `free`, `square`, `widescreen`, `standard`, `photo`,
/// `portrait`. Returns `[x, y, width, height]`.
#[wasm_bindgen]
pub fn default_crop(
    canvas_width: u32,
    canvas_height: u32,
    aspect: &str,
    zoom: f64,
) -> Result<Vec<u32>, JsValue> {
    let aspect = parse_aspect(aspect)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown aspect ratio: {}", aspect)))?;
    Ok(region_to_vec(CropRegion::centered(
        canvas_width,
        canvas_height,
        aspect,
        zoom,
    )))
}

/// Convert a normalized (0 to 1) selection to canvas pixels.
///
/// Returns `[x, y, width, height]`.
#[wasm_bindgen]
pub fn normalized_crop(
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    canvas_width: u32,
    canvas_height: u32,
) -> Vec<u32> {
    region_to_vec(CropRegion::from_normalized(
        left,
        top,
        width,
        height,
        canvas_width,
        canvas_height,
    ))
}

fn parse_aspect(name: &str) -> Option<AspectRatio> {
    AspectRatio::ALL.into_iter().find(|aspect| {
        let label = aspect.label();
        name.eq_ignore_ascii_case(label) || name.eq_ignore_ascii_case(aspect_key(*aspect))
    })
}

fn aspect_key(aspect: AspectRatio) -> &'static str {
    match aspect {
        AspectRatio::Free => "free",
        AspectRatio::Square => "square",
        AspectRatio::Widescreen => "widescreen",
        AspectRatio::Standard => "standard",
        AspectRatio::Photo => "photo",
        AspectRatio::Portrait => "portrait",
    }
}

fn region_to_vec(region: CropRegion) -> Vec<u32> {
    vec![region.x, region.y, region.width, region.height]
}
