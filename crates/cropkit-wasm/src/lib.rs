//! Cropkit WASM - WebAssembly bindings for the Cropkit export pipeline
//!
//! This crate exposes cropkit-core to the browser cropper.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for loaded sources and export results
//! - `export` - Loading images and running the export pipeline
//! - `transform` - Canvas sizing, crop presets and download names
//!
//! # Usage
//!
//! ```typescript
//! import init, { load_image, export_image, cropped_file_name } from '@cropkit/wasm';
//!
//! await init();
//!
//! const source = load_image(dataUrl);
//! const result = export_image(source, { crop, transform, filters });
//! download(result.data_url(), cropped_file_name(file.name));
//! ```

use wasm_bindgen::prelude::*;

mod export;
mod transform;
mod types;

pub use export::{export_data_url, export_image, load_image, load_image_bytes};
pub use transform::{cropped_file_name, default_crop, normalized_crop, rotated_canvas_size};
pub use types::{JsExportResult, JsSourceImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Route core log records to the browser console. Fails only when a
    // logger is already installed.
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Warn);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
