use crate::geometry::PointSet;
use crate::math::{Point2, Rotation2};

/// Rotates a point set about a pivot.
#[derive(Debug, Clone, Copy)]
pub struct Rotate {
    rotation: Rotation2,
    pivot: Point2,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in degrees, counter-clockwise positive.
    #[must_use]
    pub fn new(angle: f64, pivot: Point2) -> Self {
        Self {
            rotation: Rotation2::new(angle.to_radians()),
            pivot,
        }
    }

    /// Creates a rotation about the origin.
    #[must_use]
    pub fn about_origin(angle: f64) -> Self {
        Self::new(angle, Point2::origin())
    }

    /// Applies the rotation, returning a new point set.
    #[must_use]
    pub fn apply<S: PointSet>(&self, shape: &S) -> S {
        shape.map_points(|p| self.pivot + self.rotation * (p - self.pivot))
    }
}
