use crate::math::polygon_2d::{bounds, signed_area_2d};
use crate::math::Point2;

use super::PointSet;

/// A closed boundary polygon.
///
/// The closing edge from the last point back to the first is implicit. A
/// closing duplicate of the first point is dropped unless assembly was run
/// with `close(false)`. Only [`Assemble`] produces polygons, so every
/// instance has at least three distinct points.
///
/// [`Assemble`]: crate::operations::assemble::Assemble
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    pub(crate) fn from_points_unchecked(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for assembled polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area; positive when the boundary winds counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Absolute enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Axis-aligned bounds as `(min, max)` corners.
    #[must_use]
    pub fn bounds(&self) -> (Point2, Point2) {
        bounds(&self.points).unwrap_or((Point2::origin(), Point2::origin()))
    }

    /// Returns whether both polygons have the same vertices in the same order,
    /// each within `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| (a - b).norm() <= tolerance)
    }

    /// Consumes the polygon, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

impl PointSet for Polygon {
    fn points(&self) -> &[Point2] {
        &self.points
    }

    fn map_points<F>(&self, f: F) -> Self
    where
        F: Fn(&Point2) -> Point2,
    {
        Self {
            points: self.points.iter().map(f).collect(),
        }
    }
}
