use crate::error::{GeometryError, Result};
use crate::geometry::PointSet;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Reflects a point set across a line given by a point and a direction.
#[derive(Debug, Clone, Copy)]
pub struct Mirror {
    axis_origin: Point2,
    axis_direction: Vector2,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(axis_origin: Point2, axis_direction: Vector2) -> Self {
        Self {
            axis_origin,
            axis_direction,
        }
    }

    /// Reflection across the x axis (`y -> -y`).
    #[must_use]
    pub fn x_axis() -> Self {
        Self::new(Point2::origin(), Vector2::x())
    }

    /// Applies the reflection, returning a new point set.
    ///
    /// Reflection reverses the winding of closed boundaries.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the axis direction is zero-length.
    pub fn apply<S: PointSet>(&self, shape: &S) -> Result<S> {
        let len = self.axis_direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let axis = self.axis_direction / len;
        Ok(shape.map_points(|p| {
            let d = p - self.axis_origin;
            let along = axis * d.dot(&axis);
            self.axis_origin + along * 2.0 - d
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PointChain;
    use approx::assert_abs_diff_eq;

    #[test]
    fn x_axis_negates_y() {
        let chain = PointChain::new(vec![Point2::new(1.0, 2.0), Point2::new(-3.0, -4.0)]).unwrap();
        let mirrored = Mirror::x_axis().apply(&chain).unwrap();
        assert_abs_diff_eq!(mirrored.points()[0].x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mirrored.points()[0].y, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mirrored.points()[1].y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn diagonal_axis_swaps_coordinates() {
        let chain = PointChain::new(vec![Point2::new(1.0, 0.0), Point2::new(2.0, 5.0)]).unwrap();
        let mirrored = Mirror::new(Point2::origin(), Vector2::new(1.0, 1.0))
            .apply(&chain)
            .unwrap();
        assert_abs_diff_eq!(mirrored.points()[0].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mirrored.points()[0].y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mirrored.points()[1].x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mirrored.points()[1].y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_axis_returns_error() {
        let chain = PointChain::new(vec![Point2::origin(), Point2::new(1.0, 1.0)]).unwrap();
        assert!(Mirror::new(Point2::origin(), Vector2::zeros()).apply(&chain).is_err());
    }
}
