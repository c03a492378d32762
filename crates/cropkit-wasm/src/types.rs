//! WASM-compatible wrapper types.
//!
//! These wrap the core types so JavaScript can hold on to a decoded source
//! between exports instead of re-decoding the data URL every time.

use cropkit_core::{EncodedOutput, SourceImage};
use wasm_bindgen::prelude::*;

/// A decoded source image held in WASM memory.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// wasm-bindgen's finalizer handles cleanup as well.
#[wasm_bindgen]
pub struct JsSourceImage {
    inner: SourceImage,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Detected mime type, if the format was recognized
    #[wasm_bindgen(getter)]
    pub fn mime(&self) -> Option<String> {
        self.inner.mime().map(str::to_string)
    }

    /// EXIF orientation (1-8) of the original, 1 when absent
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> u32 {
        self.inner.orientation()
    }

    /// Size of the original encoded bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.bytes().len()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsSourceImage {
    pub(crate) fn new(inner: SourceImage) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &SourceImage {
        &self.inner
    }
}

/// An encoded export, ready to display or download.
#[wasm_bindgen]
pub struct JsExportResult {
    inner: EncodedOutput,
}

#[wasm_bindgen]
impl JsExportResult {
    /// Encoded file bytes as a `Uint8Array` (copied out of WASM memory)
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    /// Mime type of the bytes
    #[wasm_bindgen(getter)]
    pub fn mime(&self) -> String {
        self.inner.mime().to_string()
    }

    /// Extension matching the mime type, without the dot
    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.inner.format.extension().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.bytes.len()
    }

    /// Base64 `data:` URL of the bytes
    pub fn data_url(&self) -> String {
        self.inner.to_data_url()
    }
}

impl JsExportResult {
    pub(crate) fn new(inner: EncodedOutput) -> Self {
        Self { inner }
    }
}
