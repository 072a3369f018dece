pub mod chain;
pub mod polygon;

pub use chain::PointChain;
pub use polygon::Polygon;

use crate::math::Point2;

/// An ordered point sequence that rigid transforms can map pointwise.
pub trait PointSet: Sized {
    /// Returns the points in traversal order.
    fn points(&self) -> &[Point2];

    /// Returns a new value with every point replaced by `f(point)`, order preserved.
    #[must_use]
    fn map_points<F>(&self, f: F) -> Self
    where
        F: Fn(&Point2) -> Point2;
}
