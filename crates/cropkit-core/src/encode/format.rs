//! Output formats and encoded results.

use serde::{Deserialize, Serialize};

use crate::decode::dataurl;
use crate::error::PipelineError;

/// Encodings the pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossy; the only format that carries EXIF metadata.
    Jpeg,
    /// Lossless; quality is ignored.
    Png,
}

impl OutputFormat {
    /// Parse a mime type such as `image/jpeg`.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::UnsupportedEncoding` for any other type.
    pub fn from_mime(mime: &str) -> Result<Self, PipelineError> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Ok(OutputFormat::Jpeg),
            "image/png" => Ok(OutputFormat::Png),
            other => Err(PipelineError::UnsupportedEncoding(other.to_string())),
        }
    }

    /// Canonical mime type.
    pub fn mime(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }

    /// Preferred file extension.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }

    /// Whether `quality` changes the output.
    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Jpeg)
    }

    /// Whether the container can carry an EXIF block.
    pub fn carries_exif(self) -> bool {
        matches!(self, OutputFormat::Jpeg)
    }
}

/// Requested output encoding.
///
/// The format is kept as the caller's mime string and only parsed by the
/// encoder, so an unknown type surfaces as `UnsupportedEncoding`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSpec {
    /// Target mime type, e.g. `image/jpeg`
    pub format: String,
    /// Quality factor from 0.0 to 1.0 (1.0 = maximum fidelity)
    pub quality: f32,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self::jpeg(1.0)
    }
}

impl OutputSpec {
    /// JPEG at the given quality.
    pub fn jpeg(quality: f32) -> Self {
        Self {
            format: OutputFormat::Jpeg.mime().to_string(),
            quality,
        }
    }

    /// Lossless PNG.
    pub fn png() -> Self {
        Self {
            format: OutputFormat::Png.mime().to_string(),
            quality: 1.0,
        }
    }

    /// Export in the source's own format when it is supported, JPEG otherwise.
    pub fn matching_source(source_mime: Option<&str>) -> Self {
        let format = source_mime
            .and_then(|mime| OutputFormat::from_mime(mime).ok())
            .unwrap_or(OutputFormat::Jpeg);
        Self {
            format: format.mime().to_string(),
            quality: 1.0,
        }
    }

    /// Parse the requested format.
    pub fn output_format(&self) -> Result<OutputFormat, PipelineError> {
        OutputFormat::from_mime(&self.format)
    }
}

/// Encoded image bytes with their mime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedOutput {
    pub bytes: Vec<u8>,
    pub format: OutputFormat,
}

impl EncodedOutput {
    /// Mime type of the bytes.
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }

    /// Base64 `data:` URL suitable for an `<img>` source or a download link.
    pub fn to_data_url(&self) -> String {
        dataurl::format(self.mime(), &self.bytes)
    }
}
