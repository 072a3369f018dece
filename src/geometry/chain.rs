use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::PointSet;

/// An ordered run of boundary points.
///
/// Order is the traversal direction along the boundary. A chain always holds
/// at least two points, which may coincide for degenerate ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct PointChain {
    points: Vec<Point2>,
}

impl PointChain {
    /// Creates a chain from the given points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ChainTooShort` if fewer than two points are given.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::ChainTooShort(points.len()).into());
        }
        Ok(Self { points })
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a chain holds at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first point.
    #[must_use]
    pub fn first(&self) -> &Point2 {
        &self.points[0]
    }

    /// Returns the last point.
    #[must_use]
    pub fn last(&self) -> &Point2 {
        &self.points[self.points.len() - 1]
    }

    /// Returns a new chain traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Consumes the chain, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

impl PointSet for PointChain {
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
