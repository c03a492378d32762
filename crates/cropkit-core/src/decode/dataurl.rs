//! `data:` URL parsing and formatting.
//!
//! The upload and download boundaries exchange images as
//! `data:<mime>;base64,<payload>` strings. Only base64 payloads are
//! accepted; percent-encoded data URLs never carry binary images in practice.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::PipelineError;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// A decoded `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    /// Declared media type, lowercased. Empty when the URL omits it.
    pub mime: String,
    /// Decoded payload bytes.
    pub bytes: Vec<u8>,
}

/// Parse a base64 `data:` URL.
///
/// # Errors
///
/// Returns `PipelineError::ImageLoad` when the string is not a `data:` URL,
/// is not base64 encoded, or the payload is not valid base64.
pub fn parse(url: &str) -> Result<DataUrl, PipelineError> {
    let url = url.trim();
    let rest = url
        .get(..SCHEME.len())
        .filter(|scheme| scheme.eq_ignore_ascii_case(SCHEME))
        .map(|_| &url[SCHEME.len()..])
        .ok_or_else(|| PipelineError::ImageLoad("not a data URL".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| PipelineError::ImageLoad("data URL has no payload".to_string()))?;

    let header = header.to_ascii_lowercase();
    let mime = header
        .strip_suffix(BASE64_MARKER)
        .ok_or_else(|| PipelineError::ImageLoad("data URL is not base64 encoded".to_string()))?;
    // Drop parameters such as `;charset=...` that precede the base64 marker.
    let mime = mime.split(';').next().unwrap_or_default().trim().to_string();

    let cleaned: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| PipelineError::ImageLoad(format!("invalid base64 payload: {}", e)))?;

    Ok(DataUrl { mime, bytes })
}

/// Format bytes as a base64 `data:` URL.
pub fn format(mime: &str, bytes: &[u8]) -> String {
    format!("{}{}{},{}", SCHEME, mime, BASE64_MARKER, STANDARD.encode(bytes))
}
