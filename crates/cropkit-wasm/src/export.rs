//! Export pipeline WASM bindings.
//!
//! # Functions
//!
//! - [`load_image`] - Decode a data URL into a reusable source
//! - [`load_image_bytes`] - Decode raw file bytes into a reusable source
//! - [`export_image`] - Run the pipeline on a loaded source
//! - [`export_data_url`] - Decode, export and re-encode as a data URL in one call
//!
//! # Example
//!
//! ```typescript
//! import { load_image, export_image } from '@cropkit/wasm';
//!
//! const source = load_image(dataUrl);
//! const result = export_image(source, {
//!   crop: { x: 0, y: 0, width: 600, height: 800 },
//!   transform: { rotation: 90 },
//!   output: { format: 'image/jpeg', quality: 0.92 },
//! });
//! img.src = result.data_url();
//! ```

use cropkit_core::{export, ExportParams, PipelineError, SourceImage};
use wasm_bindgen::prelude::*;

use crate::types::{JsExportResult, JsSourceImage};

fn to_js(e: PipelineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_params(params: JsValue) -> Result<ExportParams, JsValue> {
    serde_wasm_bindgen::from_value(params).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode an image delivered as a `data:` URL.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the image cannot be decoded.
#[wasm_bindgen]
pub fn load_image(data_url: &str) -> Result<JsSourceImage, JsValue> {
    SourceImage::from_data_url(data_url)
        .map(JsSourceImage::new)
        .map_err(to_js)
}

/// Decode an image from raw file bytes (e.g. a `File`'s `arrayBuffer()`).
#[wasm_bindgen]
pub fn load_image_bytes(bytes: &[u8]) -> Result<JsSourceImage, JsValue> {
    SourceImage::load(bytes.to_vec())
        .map(JsSourceImage::new)
        .map_err(to_js)
}

/// Run the export pipeline on a loaded source.
///
/// `params` is an object shaped like `ExportParams`: `crop` is required,
/// `transform`, `filters` and `output` fall back to defaults.
///
/// # Errors
///
/// Returns an error if the parameters do not deserialize, the crop does not
/// fit the rotated canvas, a filter value is invalid, or encoding fails.
#[wasm_bindgen]
pub fn export_image(image: &JsSourceImage, params: JsValue) -> Result<JsExportResult, JsValue> {
    let params = parse_params(params)?;
    export(image.inner(), &params)
        .map(JsExportResult::new)
        .map_err(to_js)
}

/// Decode `data_url`, export it and return the result as a data URL.
#[wasm_bindgen]
pub fn export_data_url(data_url: &str, params: JsValue) -> Result<String, JsValue> {
    let params = parse_params(params)?;
    export_data_url_inner(data_url, &params).map_err(to_js)
}

fn export_data_url_inner(data_url: &str, params: &ExportParams) -> Result<String, PipelineError> {
    let source = SourceImage::from_data_url(data_url)?;
    Ok(export(&source, params)?.to_data_url())
}

/// PNG data URL of a small opaque image.
#[cfg(test)]
fn test_data_url(width: u32, height: u32) -> String {
    use cropkit_core::decode::dataurl;
    use cropkit_core::encode::encode_png;
    use cropkit_core::Surface;

    let pixels: Vec<u8> = (0..width * height)
        .flat_map(|i| [(i % 256) as u8, 64, 200, 255])
        .collect();
    let png = encode_png(&Surface::new(width, height, pixels)).unwrap();
    dataurl::format("image/png", &png)
}
