use crate::error::Result;
use crate::geometry::PointChain;
use crate::layout::Layer;
use crate::math::Point2;

use super::{require_positive, Placement, Primitive};

const NAME: &str = "taper";

/// Straight linear taper.
///
/// The `w1` edge is centered on `center`; the taper runs `length` along the
/// direction given by `rotate_angle` and ends with width `w2`.
#[derive(Debug, Clone, PartialEq)]
pub struct MakeTaper {
    w1: f64,
    w2: f64,
    length: f64,
    rotate_angle: f64,
    center: Point2,
    layer: Layer,
}

impl Default for MakeTaper {
    fn default() -> Self {
        Self {
            w1: 1.0,
            w2: 2.0,
            length: 10.0,
            rotate_angle: 0.0,
            center: Point2::origin(),
            layer: Layer::default(),
        }
    }
}

impl MakeTaper {
    /// Creates a new `MakeTaper` operation.
    #[must_use]
    pub fn new(w1: f64, w2: f64, length: f64) -> Self {
        Self {
            w1,
            w2,
            length,
            ..Self::default()
        }
    }

    /// Sets the direction of the taper axis, in degrees.
    #[must_use]
    pub fn with_rotation(mut self, rotate_angle: f64) -> Self {
        self.rotate_angle = rotate_angle;
        self
    }

    /// Sets the midpoint of the `w1` edge.
    #[must_use]
    pub fn with_center(mut self, center: Point2) -> Self {
        self.center = center;
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }
}

impl Primitive for MakeTaper {
    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self) -> Result<()> {
        require_positive(NAME, "w1", self.w1)?;
        require_positive(NAME, "w2", self.w2)?;
        require_positive(NAME, "length", self.length)
    }

    fn boundary(&self) -> Result<Vec<PointChain>> {
        let upper = PointChain::new(vec![
            Point2::new(0.0, self.w1 / 2.0),
            Point2::new(self.length, self.w2 / 2.0),
        ])?;
        let lower = PointChain::new(vec![
            Point2::new(0.0, -self.w1 / 2.0),
            Point2::new(self.length, -self.w2 / 2.0),
        ])?;
        Ok(vec![upper, lower.reversed()])
    }

    fn placement(&self) -> Placement {
        Placement::rotated(self.rotate_angle, self.center)
    }

    fn layer(&self) -> Layer {
        self.layer
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{AwgError, ShapeError};
    use crate::geometry::PointSet;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_taper_vertices() {
        let poly = MakeTaper::default().polygon().unwrap();
        let expected = [(0.0, 0.5), (10.0, 1.0), (10.0, -1.0), (0.0, -0.5)];
        assert_eq!(poly.len(), 4);
        for (p, (x, y)) in poly.points().iter().zip(expected) {
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-12);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-12);
        }
        // Trapezoid area: (1 + 2) / 2 * 10.
        assert_abs_diff_eq!(poly.area(), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn rotated_taper_keeps_short_edge_on_center() {
        let center = Point2::new(3.0, 4.0);
        let poly = MakeTaper::new(1.0, 2.0, 10.0)
            .with_rotation(30.0)
            .with_center(center)
            .polygon()
            .unwrap();
        let pts = poly.points();
        let mid_short = Point2::from((pts[0].coords + pts[3].coords) / 2.0);
        let mid_long = Point2::from((pts[1].coords + pts[2].coords) / 2.0);
        assert_abs_diff_eq!((mid_short - center).norm(), 0.0, epsilon = 1e-12);
        let axis = mid_long - mid_short;
        assert_abs_diff_eq!(axis.norm(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(axis.y.atan2(axis.x).to_degrees(), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn non_positive_length_is_rejected() {
        let err = MakeTaper::new(1.0, 2.0, 0.0).polygon().unwrap_err();
        assert!(matches!(
            err,
            AwgError::Shape(ShapeError::InvalidParameter { parameter: "length", .. })
        ));
        assert!(MakeTaper::new(-1.0, 2.0, 5.0).polygon().is_err());
    }
}
