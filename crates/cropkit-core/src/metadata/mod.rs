//! Best-effort EXIF carry-over from the original image to the exported JPEG.
//!
//! Re-encoding drops every metadata segment, so after encoding the EXIF block
//! of the original bytes is copied into the new JPEG as an APP1 segment. The
//! block is treated as opaque: tags are neither interpreted nor rewritten, so
//! dimension and orientation tags describe the original image.
//!
//! Only JPEG originals are read. Metadata from any other container is
//! foreign to the JPEG output and is dropped.
//!
//! Failures here never fail an export. They are logged and the encoded bytes
//! are returned as they were.

use std::io::Cursor;

use exif::Reader;
use img_parts::jpeg::{markers, Jpeg, JpegSegment};
use img_parts::{Bytes, ImageEXIF};
use thiserror::Error;

use crate::encode::OutputFormat;

const EXIF_HEADER: &[u8] = b"Exif\0\0";
const JFIF_HEADER: &[u8] = b"JFIF\0";

/// Largest payload a segment length field can describe.
const MAX_SEGMENT_PAYLOAD: usize = u16::MAX as usize - 2;

/// Reasons metadata could not be carried over.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataError {
    /// The original is not a JPEG, has no EXIF block, or it could not be parsed
    #[error("No EXIF metadata available: {0}")]
    Unavailable(String),

    /// The EXIF block could not be inserted into the encoded output
    #[error("Failed to splice EXIF metadata: {0}")]
    SpliceFailure(String),
}

/// Copy the EXIF block of `original` into `encoded`.
///
/// Only JPEG output is touched; for any other `mime` the encoded bytes are
/// returned unchanged. On any metadata failure the encoded bytes are also
/// returned unchanged.
pub fn carry_over(original: &[u8], encoded: Vec<u8>, mime: &str) -> Vec<u8> {
    let carries_exif = OutputFormat::from_mime(mime)
        .map(OutputFormat::carries_exif)
        .unwrap_or(false);
    if !carries_exif {
        return encoded;
    }

    match try_carry_over(original, &encoded) {
        Ok(spliced) => {
            log::debug!(
                "Carried {} bytes of EXIF metadata into export",
                spliced.len().saturating_sub(encoded.len())
            );
            spliced
        }
        Err(MetadataError::Unavailable(reason)) => {
            log::debug!("Exporting without metadata: {}", reason);
            encoded
        }
        Err(err) => {
            log::warn!("Exporting without metadata: {}", err);
            encoded
        }
    }
}

/// Splice the EXIF block of the JPEG `original` into the JPEG `encoded`.
///
/// The result is re-parsed before it is returned.
pub fn try_carry_over(original: &[u8], encoded: &[u8]) -> Result<Vec<u8>, MetadataError> {
    let exif = read_jpeg_exif(original)?;
    let spliced = splice_exif(encoded, exif)?;

    Reader::new()
        .read_from_container(&mut Cursor::new(spliced.as_slice()))
        .map_err(|e| MetadataError::SpliceFailure(format!("result does not re-parse: {}", e)))?;

    Ok(spliced)
}

/// Raw TIFF bytes of the EXIF block of a JPEG, checked to parse.
fn read_jpeg_exif(original: &[u8]) -> Result<Bytes, MetadataError> {
    let jpeg = Jpeg::from_bytes(Bytes::copy_from_slice(original))
        .map_err(|e| MetadataError::Unavailable(format!("original is not a JPEG: {}", e)))?;

    let exif = jpeg
        .exif()
        .ok_or_else(|| MetadataError::Unavailable("original has no EXIF block".to_string()))?;

    Reader::new()
        .read_raw(exif.to_vec())
        .map_err(|e| MetadataError::Unavailable(e.to_string()))?;

    Ok(exif)
}

/// Replace the EXIF APP1 of `encoded` with one holding `exif`.
///
/// The new segment goes right after a leading JFIF APP0, or right after SOI
/// when there is none.
fn splice_exif(encoded: &[u8], exif: Bytes) -> Result<Vec<u8>, MetadataError> {
    let payload_len = EXIF_HEADER.len() + exif.len();
    if payload_len > MAX_SEGMENT_PAYLOAD {
        return Err(MetadataError::SpliceFailure(format!(
            "EXIF block of {} bytes does not fit in one APP1 segment",
            exif.len()
        )));
    }

    let mut jpeg = Jpeg::from_bytes(Bytes::copy_from_slice(encoded))
        .map_err(|e| MetadataError::SpliceFailure(format!("output is not a JPEG: {}", e)))?;

    let segments = jpeg.segments_mut();
    segments.retain(|segment| !is_exif(segment));

    let insert_at = match segments.first() {
        Some(first) if is_jfif(first) => 1,
        _ => 0,
    };

    let mut contents = Vec::with_capacity(payload_len);
    contents.extend_from_slice(EXIF_HEADER);
    contents.extend_from_slice(&exif);
    segments.insert(
        insert_at,
        JpegSegment::new_with_contents(markers::APP1, Bytes::from(contents)),
    );

    Ok(jpeg.encoder().bytes().to_vec())
}

fn is_exif(segment: &JpegSegment) -> bool {
    segment.marker() == markers::APP1 && segment.contents().starts_with(EXIF_HEADER)
}

fn is_jfif(segment: &JpegSegment) -> bool {
    segment.marker() == markers::APP0 && segment.contents().starts_with(JFIF_HEADER)
}
