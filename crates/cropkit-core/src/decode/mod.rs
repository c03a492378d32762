//! Source image decoding.
//!
//! This module provides functionality for:
//! - Decoding the uploaded image into an RGBA raster
//! - Keeping the original bytes for metadata carry-over
//! - Parsing and formatting base64 `data:` URLs at the upload/download boundary
//!
//! Decoding is delegated to the `image` crate; any format it was built with
//! (JPEG and PNG here) can be used as a source.

pub mod dataurl;
mod source;

pub use dataurl::DataUrl;
pub use source::SourceImage;
