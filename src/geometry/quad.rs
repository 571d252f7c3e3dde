//! Four-corner polygons.

use super::coord::Coord;
use super::{Normalized, Pixel};

/// Number of corners every exported annotation carries.
pub const QUAD_POINTS: usize = 4;

/// A polygon with exactly four corners, in the order they are written out.
///
/// Nothing is enforced about winding or convexity; polygon corners are kept
/// in the order the annotator placed them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad<TSpace> {
    pub corners: [Coord<TSpace>; QUAD_POINTS],
}

impl<TSpace: Copy> Quad<TSpace> {
    /// Builds the axis-aligned box spanned by two opposite corners.
    ///
    /// Corners come out as top-left, top-right, bottom-right, bottom-left
    /// whatever order `a` and `b` are given in. Identical points yield a
    /// degenerate box with four equal corners.
    pub fn from_rectangle_corners(a: Coord<TSpace>, b: Coord<TSpace>) -> Self {
        let (xmin, xmax) = (a.x.min(b.x), a.x.max(b.x));
        let (ymin, ymax) = (a.y.min(b.y), a.y.max(b.y));
        Self {
            corners: [
                Coord::new(xmin, ymin),
                Coord::new(xmax, ymin),
                Coord::new(xmax, ymax),
                Coord::new(xmin, ymax),
            ],
        }
    }

    /// Takes the points as an already ordered polygon.
    ///
    /// Returns `None` unless there are exactly four points.
    pub fn from_points(points: &[Coord<TSpace>]) -> Option<Self> {
        let corners: [Coord<TSpace>; QUAD_POINTS] = points.try_into().ok()?;
        Some(Self { corners })
    }

    pub fn is_finite(&self) -> bool {
        self.corners.iter().all(Coord::is_finite)
    }
}

impl Quad<Pixel> {
    /// Converts every corner to image-relative coordinates.
    pub fn to_normalized(&self, width: f64, height: f64) -> Quad<Normalized> {
        Quad {
            corners: self.corners.map(|c| c.to_normalized(width, height)),
        }
    }
}
