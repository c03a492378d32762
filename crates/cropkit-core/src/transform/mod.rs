//! Geometry stages of the export pipeline: sizing, rendering and cropping.
//!
//! # Transform Order
//!
//! 1. Size the canvas to the rotated bounding box
//! 2. Render the source rotated and flipped about the canvas center, then
//!    apply color filters
//! 3. Crop the requested window out of the canvas
//!
//! Rendering to a full canvas first and cropping second keeps crop
//! coordinates in rotated-canvas space, which is what the cropper UI shows.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise
//! - Crop coordinates are whole pixels on the rotated canvas
//! - Origin is top-left corner

mod bounds;
mod crop;
mod render;

pub use bounds::{canvas_size, rotated_size};
pub use crop::{crop_region, AspectRatio, CropRegion};
pub use render::render_rotated;
