use crate::error::{Result, ShapeError};
use crate::geometry::PointChain;
use crate::layout::Layer;
use crate::math::{Point2, TOLERANCE};

use super::{require_positive, MakeTaper, Placement, Primitive};

const NAME: &str = "waveguide";

/// Straight waveguide between two centerline points.
#[derive(Debug, Clone, PartialEq)]
pub struct MakeWaveguide {
    start: Point2,
    end: Point2,
    width: f64,
    layer: Layer,
}

impl Default for MakeWaveguide {
    fn default() -> Self {
        Self {
            start: Point2::origin(),
            end: Point2::new(10.0, 0.0),
            width: 0.5,
            layer: Layer::default(),
        }
    }
}

impl MakeWaveguide {
    /// Creates a new `MakeWaveguide` operation.
    #[must_use]
    pub fn new(start: Point2, end: Point2, width: f64) -> Self {
        Self {
            start,
            end,
            width,
            layer: Layer::default(),
        }
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    /// Equivalent constant-width taper.
    fn as_taper(&self) -> MakeTaper {
        let d = self.end - self.start;
        MakeTaper::new(self.width, self.width, d.norm())
            .with_rotation(d.y.atan2(d.x).to_degrees())
            .with_center(self.start)
            .with_layer(self.layer)
    }
}

impl Primitive for MakeWaveguide {
    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self) -> Result<()> {
        require_positive(NAME, "width", self.width)?;
        let length = (self.end - self.start).norm();
        if length < TOLERANCE {
            return Err(ShapeError::InvalidParameter {
                shape: NAME,
                parameter: "length",
                value: length,
                requirement: "must be > 0 (start and end coincide)",
            }
            .into());
        }
        Ok(())
    }

    fn boundary(&self) -> Result<Vec<PointChain>> {
        self.as_taper().boundary()
    }

    fn placement(&self) -> Placement {
        self.as_taper().placement()
    }

    fn layer(&self) -> Layer {
        self.layer
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PointSet;
    use approx::assert_abs_diff_eq;

    #[test]
    fn diagonal_waveguide_corners() {
        let poly = MakeWaveguide::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0), 2.0)
            .polygon()
            .unwrap();
        assert_eq!(poly.len(), 4);
        assert_abs_diff_eq!(poly.area(), 10.0, epsilon = 1e-12);
        // Unit normal to (3, 4) is (-0.8, 0.6).
        let pts = poly.points();
        assert_abs_diff_eq!(pts[0].x, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[0].y, 1.6, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[1].x, 3.2, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[1].y, 5.6, epsilon = 1e-12);
    }

    #[test]
    fn coincident_endpoints_are_rejected() {
        let p = Point2::new(2.0, 2.0);
        assert!(MakeWaveguide::new(p, p, 0.5).polygon().is_err());
        assert!(MakeWaveguide::new(Point2::origin(), p, 0.0).polygon().is_err());
    }
}
