use crate::geometry::PointSet;
use crate::math::Vector2;

/// Translates a point set by a displacement vector.
#[derive(Debug, Clone, Copy)]
pub struct Translate {
    displacement: Vector2,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector2) -> Self {
        Self { displacement }
    }

    /// Applies the translation, returning a new point set.
    #[must_use]
    pub fn apply<S: PointSet>(&self, shape: &S) -> S {
        shape.map_points(|p| p + self.displacement)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PointChain;
    use crate::math::Point2;

    #[test]
    fn shifts_every_point_in_order() {
        let chain = PointChain::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 2.0)]).unwrap();
        let moved = Translate::new(Vector2::new(-1.0, 0.5)).apply(&chain);
        assert_eq!(moved.points()[0], Point2::new(-1.0, 0.5));
        assert_eq!(moved.points()[1], Point2::new(0.0, 2.5));
        assert_eq!(chain.points()[0], Point2::new(0.0, 0.0));
    }
}
