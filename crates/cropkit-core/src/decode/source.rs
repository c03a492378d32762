//! Source image loading.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::ImageReader;

use super::dataurl;
use crate::error::PipelineError;
use crate::surface::Surface;

/// A decoded source image together with the bytes it was decoded from.
///
/// The original bytes are kept so the metadata stage can read the EXIF block
/// after the pixels have been re-encoded.
#[derive(Debug, Clone)]
pub struct SourceImage {
    raster: Surface,
    bytes: Vec<u8>,
    mime: Option<String>,
}

impl SourceImage {
    /// Decode an image from its encoded bytes.
    ///
    /// The format is sniffed from the bytes. Pixels are kept in stored order;
    /// the EXIF orientation tag is carried as opaque metadata and is not
    /// applied here.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::ImageLoad` if the bytes cannot be decoded.
    pub fn load(bytes: Vec<u8>) -> Result<Self, PipelineError> {
        if bytes.is_empty() {
            return Err(PipelineError::ImageLoad("image is empty".to_string()));
        }

        let reader = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(|e| PipelineError::ImageLoad(e.to_string()))?;

        let mime = reader.format().map(|f| f.to_mime_type().to_string());

        let img = reader
            .decode()
            .map_err(|e| PipelineError::ImageLoad(e.to_string()))?;

        let raster = Surface::from_rgba_image(img.into_rgba8());
        if raster.is_empty() {
            return Err(PipelineError::ImageLoad(
                "image has no pixels".to_string(),
            ));
        }

        log::debug!(
            "Loaded {}x{} source ({})",
            raster.width,
            raster.height,
            mime.as_deref().unwrap_or("unknown format")
        );

        Ok(Self {
            raster,
            bytes,
            mime,
        })
    }

    /// Decode an image delivered as a base64 `data:` URL.
    ///
    /// The declared media type is only used when the bytes themselves do not
    /// identify a format.
    pub fn from_data_url(url: &str) -> Result<Self, PipelineError> {
        let parsed = dataurl::parse(url)?;
        let mut source = Self::load(parsed.bytes)?;
        if source.mime.is_none() && !parsed.mime.is_empty() {
            source.mime = Some(parsed.mime);
        }
        Ok(source)
    }

    /// Decoded RGBA pixels.
    pub fn raster(&self) -> &Surface {
        &self.raster
    }

    /// Original encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Detected mime type of the original bytes.
    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.raster.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.raster.height
    }

    /// EXIF orientation value (1-8) of the original, 1 when absent.
    ///
    /// Exposed so a UI can display the source the same way the pipeline
    /// sees it.
    pub fn orientation(&self) -> u32 {
        let mut cursor = Cursor::new(self.bytes.as_slice());
        match Reader::new().read_from_container(&mut cursor) {
            Ok(exif) => exif
                .get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
                .filter(|v| (1..=8).contains(v))
                .unwrap_or(1),
            Err(_) => 1,
        }
    }
}
