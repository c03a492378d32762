//! Rendering the source onto the rotated canvas.
//!
//! The canvas is sized by [`canvas_size`] and the source is drawn with this
//! forward transform (y axis pointing down, positive angles turn clockwise):
//!
//! ```text
//! translate(canvas_w / 2, canvas_h / 2)
//! rotate(θ)
//! scale(flip_h ? -1 : 1, flip_v ? -1 : 1)
//! translate(-src_w / 2, -src_h / 2)
//! ```
//!
//! The last translation uses the *source* size, which centers the unrotated
//! image on the origin before rotation. Rendering uses inverse mapping: each
//! canvas pixel center is mapped back into the source and sampled
//! bilinearly. Samples that fall outside the source are transparent.

use super::bounds::{canvas_size, sin_cos_degrees};
use crate::filters::apply_color_filters;
use crate::surface::{Surface, CHANNELS};
use crate::{ColorFilters, Transform};

/// Render the source rotated, flipped and filtered onto a fresh canvas.
///
/// The returned surface is `canvas_size(src_w, src_h, rotation)` pixels.
/// Color filters are applied uniformly to the whole canvas after drawing.
/// The source is only read.
pub fn render_rotated(source: &Surface, transform: &Transform, filters: &ColorFilters) -> Surface {
    let mut canvas = if transform.is_identity() {
        // Fast path: nothing to resample
        source.clone()
    } else {
        draw_transformed(source, transform)
    };

    apply_color_filters(&mut canvas.pixels, filters);

    log::debug!(
        "Rendered {}x{} source onto {}x{} canvas at {} degrees",
        source.width,
        source.height,
        canvas.width,
        canvas.height,
        transform.rotation
    );

    canvas
}

fn draw_transformed(source: &Surface, transform: &Transform) -> Surface {
    let (dst_w, dst_h) = canvas_size(source.width, source.height, transform.rotation);
    let (sin, cos) = sin_cos_degrees(transform.rotation);

    let scale_x = if transform.flip_horizontal { -1.0 } else { 1.0 };
    let scale_y = if transform.flip_vertical { -1.0 } else { 1.0 };

    let src_cx = source.width as f64 / 2.0;
    let src_cy = source.height as f64 / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut canvas = Surface::transparent(dst_w, dst_h);

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Pixel center relative to the canvas center
            let dx = dst_x as f64 + 0.5 - dst_cx;
            let dy = dst_y as f64 + 0.5 - dst_cy;

            // Inverse rotation, then inverse flip (a flip is its own inverse)
            let rx = (dx * cos + dy * sin) * scale_x;
            let ry = (dy * cos - dx * sin) * scale_y;

            // Back to source pixel-index space (centers sit at i + 0.5)
            let src_x = rx + src_cx - 0.5;
            let src_y = ry + src_cy - 0.5;

            let pixel = sample_bilinear(source, src_x, src_y);
            let idx = canvas.offset(dst_x, dst_y);
            canvas.pixels[idx..idx + CHANNELS].copy_from_slice(&pixel);
        }
    }

    canvas
}

/// Sample a pixel using bilinear interpolation in premultiplied alpha.
///
/// Neighbors outside the source count as transparent, which gives rotated
/// edges the same soft coverage a 2D canvas produces. When `(x, y)` lands
/// exactly on a pixel the result is that pixel unchanged.
fn sample_bilinear(image: &Surface, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = (image.width as i64, image.height as i64);

    // Entirely outside, including the one-pixel blend band
    if x <= -1.0 || y <= -1.0 || x >= w as f64 || y >= h as f64 {
        return [0, 0, 0, 0];
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let taps = [
        (x0, y0, (1.0 - fx) * (1.0 - fy)),
        (x0 + 1, y0, fx * (1.0 - fy)),
        (x0, y0 + 1, (1.0 - fx) * fy),
        (x0 + 1, y0 + 1, fx * fy),
    ];

    let mut color = [0.0f64; 3];
    let mut alpha = 0.0f64;

    for (px, py, weight) in taps {
        if weight == 0.0 || px < 0 || py < 0 || px >= w || py >= h {
            continue;
        }
        let p = image.pixel(px as u32, py as u32);
        let a = p[3] as f64 * weight;
        color[0] += p[0] as f64 * a;
        color[1] += p[1] as f64 * a;
        color[2] += p[2] as f64 * a;
        alpha += a;
    }

    if alpha <= 0.0 {
        return [0, 0, 0, 0];
    }

    [
        (color[0] / alpha).round().clamp(0.0, 255.0) as u8,
        (color[1] / alpha).round().clamp(0.0, 255.0) as u8,
        (color[2] / alpha).round().clamp(0.0, 255.0) as u8,
        alpha.round().clamp(0.0, 255.0) as u8,
    ]
}
