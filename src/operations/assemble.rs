use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::{PointChain, PointSet, Polygon};
use crate::math::polygon_2d::{distinct_count, push_distinct};
use crate::math::coincident;

/// Joins boundary chains into one closed polygon.
///
/// Chains are concatenated in the given order; the caller is responsible for
/// presenting them winding-consistently (e.g. inner forward + outer reversed).
/// No winding correction is performed.
pub struct Assemble {
    chains: Vec<PointChain>,
    close: bool,
}

impl Assemble {
    /// Creates a new `Assemble` operation that closes the boundary.
    #[must_use]
    pub fn new(chains: Vec<PointChain>) -> Self {
        Self {
            chains,
            close: true,
        }
    }

    /// Sets whether a trailing point equal to the first is dropped.
    ///
    /// Closure is always implicit in [`Polygon`]; with `close = false` the
    /// concatenation is kept as-is at the seam.
    #[must_use]
    pub fn close(mut self, close: bool) -> Self {
        self.close = close;
        self
    }

    /// Executes the assembly.
    ///
    /// Consecutive coincident points, such as the shared point where two
    /// chains meet, are merged into one.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if fewer than three distinct points result.
    pub fn execute(&self) -> Result<Polygon> {
        let capacity = self.chains.iter().map(PointChain::len).sum();
        let mut points = Vec::with_capacity(capacity);
        for chain in &self.chains {
            for &pt in chain.points() {
                push_distinct(&mut points, pt);
            }
        }

        if self.close && points.len() > 1 && coincident(&points[0], &points[points.len() - 1]) {
            points.pop();
        }

        let distinct = distinct_count(&points);
        trace!(
            chains = self.chains.len(),
            input = capacity,
            points = points.len(),
            distinct,
            "assembled boundary"
        );
        if distinct < 3 {
            return Err(GeometryError::Degenerate { distinct }.into());
        }
        Ok(Polygon::from_points_unchecked(points))
    }
}
