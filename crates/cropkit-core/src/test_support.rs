//! Shared fixtures for unit tests.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::surface::Surface;

/// Opaque surface where neighboring pixels differ in every channel.
pub fn gradient(width: u32, height: u32) -> Surface {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 12) as u8);
            pixels.push((y * 12 + 3) as u8);
            pixels.push((x * 5 + y * 7 + 40) as u8);
            pixels.push(255);
        }
    }
    Surface::new(width, height, pixels)
}

/// Surface filled with one RGBA color.
pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Surface {
    let pixels = rgba
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 4)
        .collect();
    Surface::new(width, height, pixels)
}

/// Lossless PNG bytes of a surface.
pub fn encode_png(surface: &Surface) -> Vec<u8> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(
            &surface.pixels,
            surface.width,
            surface.height,
            ExtendedColorType::Rgba8,
        )
        .unwrap();
    buf
}

/// Gray gradient JPEG without any metadata segment.
pub fn plain_jpeg(width: u32, height: u32) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            let v = ((x + y) * 8) as u8;
            rgb.extend_from_slice(&[v, v, v]);
        }
    }
    let mut buf = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buf, 90)
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buf.into_inner()
}

/// APP1 segment holding a little-endian TIFF block with one Orientation entry.
pub fn orientation_app1(orientation: u16) -> Vec<u8> {
    let tiff_len: u16 = 8 + 2 + 12 + 4;
    let segment_len: u16 = 2 + 6 + tiff_len;

    let mut buf = Vec::with_capacity(2 + segment_len as usize);
    buf.extend_from_slice(&[0xFF, 0xE1]);
    buf.extend_from_slice(&segment_len.to_be_bytes());
    buf.extend_from_slice(b"Exif\0\0");

    // TIFF header, IFD0 at offset 8
    buf.extend_from_slice(b"II");
    buf.extend_from_slice(&42u16.to_le_bytes());
    buf.extend_from_slice(&8u32.to_le_bytes());

    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x0112u16.to_le_bytes());
    buf.extend_from_slice(&3u16.to_le_bytes());
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&orientation.to_le_bytes());
    buf.extend_from_slice(&[0, 0]);

    buf.extend_from_slice(&0u32.to_le_bytes());
    buf
}

/// JPEG with an EXIF block carrying the given orientation, placed after SOI.
pub fn jpeg_with_exif(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let jpeg = plain_jpeg(width, height);
    let mut out = Vec::with_capacity(jpeg.len() + 64);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&orientation_app1(orientation));
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Orientation tag of a JPEG, if it has a readable EXIF block.
pub fn read_orientation(bytes: &[u8]) -> Option<u32> {
    let exif = exif::Reader::new()
        .read_from_container(&mut Cursor::new(bytes))
        .ok()?;
    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|f| f.value.get_uint(0))
}
