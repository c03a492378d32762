//! Cropping the rendered canvas.
//!
//! Crop regions are whole pixels in the coordinate space of the *rotated*
//! canvas, not of the original image. A region that does not fit is an
//! error: clamping it would silently return a smaller image than requested.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left corner of the rotated canvas
//! - the window covers `[x, x + width) × [y, y + height)`

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::surface::{Surface, CHANNELS};

/// A pixel rectangle on the rotated canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole canvas.
    pub fn full(canvas_width: u32, canvas_height: u32) -> Self {
        Self::new(0, 0, canvas_width, canvas_height)
    }

    /// Check the region against a canvas of the given size.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidCropRegion` when the region is empty or
    /// any part of it lies outside the canvas.
    pub fn validate(&self, canvas_width: u32, canvas_height: u32) -> Result<(), PipelineError> {
        let fits_x = self
            .x
            .checked_add(self.width)
            .is_some_and(|right| right <= canvas_width);
        let fits_y = self
            .y
            .checked_add(self.height)
            .is_some_and(|bottom| bottom <= canvas_height);

        if self.width == 0 || self.height == 0 || !fits_x || !fits_y {
            return Err(PipelineError::InvalidCropRegion {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                canvas_width,
                canvas_height,
            });
        }
        Ok(())
    }

    /// Convert a normalized area (0.0 to 1.0 of the canvas) to pixels.
    ///
    /// Croppers often report the selection as fractions of the displayed
    /// media. Edges are rounded to the nearest pixel and the result is kept
    /// inside the canvas, with a minimum size of 1x1.
    pub fn from_normalized(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Self {
        let cw = canvas_width as f64;
        let ch = canvas_height as f64;

        let x0 = (left.clamp(0.0, 1.0) * cw).round() as u32;
        let y0 = (top.clamp(0.0, 1.0) * ch).round() as u32;
        let x1 = ((left + width).clamp(0.0, 1.0) * cw).round() as u32;
        let y1 = ((top + height).clamp(0.0, 1.0) * ch).round() as u32;

        let x0 = x0.min(canvas_width.saturating_sub(1));
        let y0 = y0.min(canvas_height.saturating_sub(1));

        Self::new(
            x0,
            y0,
            x1.saturating_sub(x0).max(1),
            y1.saturating_sub(y0).max(1),
        )
    }

    /// The default crop viewport for an aspect ratio and zoom factor.
    ///
    /// The largest rectangle of the requested aspect that fits the canvas is
    /// divided by `zoom` and centered. A free aspect uses the canvas aspect.
    /// Zoom values below 1 are treated as 1.
    pub fn centered(
        canvas_width: u32,
        canvas_height: u32,
        aspect: AspectRatio,
        zoom: f64,
    ) -> Self {
        let cw = canvas_width as f64;
        let ch = canvas_height as f64;
        let zoom = if zoom.is_finite() { zoom.max(1.0) } else { 1.0 };

        let (fit_w, fit_h) = match aspect.ratio() {
            Some(ratio) if cw / ch > ratio => (ch * ratio, ch),
            Some(ratio) => (cw, cw / ratio),
            None => (cw, ch),
        };

        let width = ((fit_w / zoom).round() as u32).clamp(1, canvas_width.max(1));
        let height = ((fit_h / zoom).round() as u32).clamp(1, canvas_height.max(1));

        Self::new(
            (canvas_width - width.min(canvas_width)) / 2,
            (canvas_height - height.min(canvas_height)) / 2,
            width,
            height,
        )
    }
}

/// Aspect ratio presets offered by the cropper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AspectRatio {
    /// Any shape
    #[default]
    Free,
    /// 1:1
    Square,
    /// 16:9
    Widescreen,
    /// 4:3
    Standard,
    /// 3:2
    Photo,
    /// 9:16
    Portrait,
}

impl AspectRatio {
    /// Every preset, in menu order.
    pub const ALL: [AspectRatio; 6] = [
        AspectRatio::Free,
        AspectRatio::Square,
        AspectRatio::Widescreen,
        AspectRatio::Standard,
        AspectRatio::Photo,
        AspectRatio::Portrait,
    ];

    /// Width divided by height, `None` for a free crop.
    pub fn ratio(self) -> Option<f64> {
        match self {
            AspectRatio::Free => None,
            AspectRatio::Square => Some(1.0),
            AspectRatio::Widescreen => Some(16.0 / 9.0),
            AspectRatio::Standard => Some(4.0 / 3.0),
            AspectRatio::Photo => Some(3.0 / 2.0),
            AspectRatio::Portrait => Some(9.0 / 16.0),
        }
    }

    /// Short label such as `"16:9"`.
    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Free => "Free",
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Standard => "4:3",
            AspectRatio::Photo => "3:2",
            AspectRatio::Portrait => "9:16",
        }
    }
}

/// Copy the crop window out of `canvas` into a new, tightly sized surface.
///
/// The region is validated before anything is copied.
///
/// # Example
///
/// ```
/// use cropkit_core::surface::Surface;
/// use cropkit_core::transform::{crop_region, CropRegion};
///
/// let canvas = Surface::transparent(100, 100);
/// let cropped = crop_region(&canvas, &CropRegion::new(25, 25, 50, 40)).unwrap();
/// assert_eq!((cropped.width, cropped.height), (50, 40));
/// ```
pub fn crop_region(canvas: &Surface, region: &CropRegion) -> Result<Surface, PipelineError> {
    region.validate(canvas.width, canvas.height)?;

    // Fast path: full crop returns a clone
    if region.x == 0
        && region.y == 0
        && region.width == canvas.width
        && region.height == canvas.height
    {
        return Ok(canvas.clone());
    }

    let row_bytes = region.width as usize * CHANNELS;
    let mut output = Vec::with_capacity(row_bytes * region.height as usize);

    // Copy pixel data row by row
    for y in region.y..region.y + region.height {
        let start = canvas.offset(region.x, y);
        output.extend_from_slice(&canvas.pixels[start..start + row_bytes]);
    }

    Ok(Surface::new(region.width, region.height, output))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
