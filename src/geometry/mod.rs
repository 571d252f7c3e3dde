//! Coordinate types for oriented-box annotations.
//!
//! LabelMe stores shapes in pixel space while YOLO label files hold
//! coordinates relative to the image size. The two spaces are separate types
//! so a pixel coordinate can never be written into a label file by mistake.
//!
//! # Example
//!
//! ```
//! use yoloset::geometry::{Coord, Pixel, Quad};
//!
//! let quad = Quad::<Pixel>::from_rectangle_corners(
//!     Coord::new(120.0, 80.0),
//!     Coord::new(20.0, 10.0),
//! );
//! let normalized = quad.to_normalized(200.0, 100.0);
//! assert_eq!(normalized.corners[0].x, 0.1);
//! assert_eq!(normalized.corners[2].y, 0.8);
//! ```

mod annotation;
mod coord;
mod quad;

pub use annotation::{render_label_lines, NormalizedAnnotation};
pub use coord::Coord;
pub use quad::{Quad, QUAD_POINTS};

use std::fmt;

/// Marker type for pixel coordinates as stored in LabelMe files.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker type for coordinates divided by the image width/height.
///
/// Values are expected in `[0, 1]` but out-of-range values are kept as-is.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
