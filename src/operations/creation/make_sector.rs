use crate::error::{Result, ShapeError};
use crate::geometry::PointChain;
use crate::layout::Layer;
use crate::math::sampling::sample_arc;
use crate::math::Point2;

use super::{require_positive, Placement, Primitive};

const NAME: &str = "sector";

/// Circular sector: an arc closed through the center.
#[derive(Debug, Clone, PartialEq)]
pub struct MakeSector {
    radius: f64,
    angle_start: f64,
    angle_stop: f64,
    angle_resolution: f64,
    center: Point2,
    layer: Layer,
}

impl Default for MakeSector {
    fn default() -> Self {
        Self {
            radius: 10.0,
            angle_start: 0.0,
            angle_stop: 90.0,
            angle_resolution: 2.5,
            center: Point2::origin(),
            layer: Layer::default(),
        }
    }
}

impl MakeSector {
    /// Creates a new `MakeSector` operation.
    #[must_use]
    pub fn new(radius: f64, angle_start: f64, angle_stop: f64) -> Self {
        Self {
            radius,
            angle_start,
            angle_stop,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_resolution(mut self, angle_resolution: f64) -> Self {
        self.angle_resolution = angle_resolution;
        self
    }

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

impl Primitive for MakeSector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self) -> Result<()> {
        require_positive(NAME, "radius", self.radius)?;
        require_positive(NAME, "angle_resolution", self.angle_resolution)?;
        if self.angle_stop <= self.angle_start {
            return Err(ShapeError::InvalidParameter {
                shape: NAME,
                parameter: "angle_stop",
                value: self.angle_stop,
                requirement: "must be > angle_start",
            }
            .into());
        }
        Ok(())
    }

    fn boundary(&self) -> Result<Vec<PointChain>> {
        let arc = |r| sample_arc(r, self.angle_start, self.angle_stop, self.angle_resolution);
        // A zero-radius inner edge collapses to the apex during assembly.
        Ok(vec![arc(self.radius)?, arc(0.0)?.reversed()])
    }

    fn placement(&self) -> Placement {
        Placement::at(self.center)
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
    use std::f64::consts::PI;

    #[test]
    fn arc_followed_by_apex() {
        let center = Point2::new(1.0, 2.0);
        let poly = MakeSector::default().with_center(center).polygon().unwrap();
        assert_eq!(poly.len(), 38);
        let pts = poly.points();
        assert_abs_diff_eq!((pts[37] - center).norm(), 0.0, epsilon = 1e-12);
        for p in &pts[..37] {
            assert_abs_diff_eq!((p - center).norm(), 10.0, epsilon = 1e-12);
        }
        assert!(poly.signed_area() > 0.0);
    }

    #[test]
    fn area_approaches_circular_sector() {
        let poly = MakeSector::new(3.0, -30.0, 60.0)
            .with_resolution(0.05)
            .polygon()
            .unwrap();
        assert_abs_diff_eq!(poly.area(), PI / 4.0 * 9.0, epsilon = 1e-4);
    }

    #[test]
    fn requires_strictly_increasing_angles() {
        assert!(MakeSector::new(10.0, 45.0, 45.0).polygon().is_err());
        assert!(MakeSector::new(10.0, 90.0, 0.0).polygon().is_err());
        assert!(MakeSector::new(-1.0, 0.0, 90.0).polygon().is_err());
    }
}
