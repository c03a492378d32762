//! Bounding box of a rotated rectangle.
//!
//! For rotation by angle θ about the rectangle's center:
//! ```text
//! box_w = |cos θ · w| + |sin θ · h|
//! box_h = |sin θ · w| + |cos θ · h|
//! ```

/// Tolerance below which a sine or cosine is snapped to its integer value.
const TRIG_SNAP: f64 = 1e-12;

/// Tolerance absorbed before rounding a box dimension up to whole pixels.
const PIXEL_EPSILON: f64 = 1e-6;

/// Sine and cosine of an angle in degrees, exact at multiples of 90.
///
/// `f64::to_radians` followed by `cos` leaves values like `6.1e-17` at 90
/// degrees; snapping them keeps quarter-turn canvases exact.
pub(crate) fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let (sin, cos) = (degrees % 360.0).to_radians().sin_cos();
    (snap(sin), snap(cos))
}

#[inline]
fn snap(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < TRIG_SNAP {
        r
    } else {
        v
    }
}

/// Compute the exact bounding box of a `width` x `height` rectangle rotated
/// by `degrees` about its center.
///
/// This is a total function: any real angle is accepted, and negative or
/// oversized angles behave like their value modulo 360.
///
/// # Example
///
/// ```
/// use cropkit_core::transform::rotated_size;
///
/// let (w, h) = rotated_size(800, 600, 90.0);
/// assert_eq!((w, h), (600.0, 800.0));
/// ```
pub fn rotated_size(width: u32, height: u32, degrees: f64) -> (f64, f64) {
    let (sin, cos) = sin_cos_degrees(degrees);
    let w = width as f64;
    let h = height as f64;

    (
        (cos * w).abs() + (sin * h).abs(),
        (sin * w).abs() + (cos * h).abs(),
    )
}

/// Integer size of the canvas the renderer draws the rotated image onto.
///
/// Each dimension is the smallest whole number of pixels that contains the
/// rotated box, after absorbing floating drift, and is at least 1.
///
/// An HTML canvas truncates fractional sizes instead (141.42 becomes 141).
/// At angles that are not quarter turns the canvas here can therefore be one
/// pixel larger than the browser's, with the image center shifted by up to
/// half a pixel. Quarter turns produce identical sizes.
pub fn canvas_size(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    let (w, h) = rotated_size(width, height, degrees);
    (to_pixels(w), to_pixels(h))
}

#[inline]
fn to_pixels(v: f64) -> u32 {
    if !v.is_finite() {
        return 1;
    }
    ((v - PIXEL_EPSILON).ceil().max(1.0)).min(u32::MAX as f64) as u32
}
