use crate::error::Result;
use crate::geometry::PointChain;
use crate::layout::Layer;
use crate::math::sampling::sample_ellipse_arc;
use crate::math::Point2;

use super::{require_positive, Placement, Primitive};

const NAME: &str = "elliptical arc ring";

/// Band between two concentric, coaxial elliptical arcs.
///
/// Angles are the parametric angle `t` in `(a cos t, b sin t)`, in degrees,
/// and may run in either direction. The whole ring is rotated about its
/// center by `rotate_angle`.
#[derive(Debug, Clone, PartialEq)]
pub struct MakeEllipticalArcRing {
    a_inner: f64,
    b_inner: f64,
    a_outer: f64,
    b_outer: f64,
    theta_start: f64,
    theta_stop: f64,
    rotate_angle: f64,
    angle_resolution: f64,
    center: Point2,
    layer: Layer,
}

impl MakeEllipticalArcRing {
    /// Creates a new `MakeEllipticalArcRing` operation covering the full ellipse.
    #[must_use]
    pub fn new(a_inner: f64, b_inner: f64, a_outer: f64, b_outer: f64) -> Self {
        Self {
            a_inner,
            b_inner,
            a_outer,
            b_outer,
            theta_start: 0.0,
            theta_stop: 360.0,
            rotate_angle: 0.0,
            angle_resolution: 1.0,
            center: Point2::origin(),
            layer: Layer::default(),
        }
    }

    #[must_use]
    pub fn with_angles(mut self, theta_start: f64, theta_stop: f64) -> Self {
        self.theta_start = theta_start;
        self.theta_stop = theta_stop;
        self
    }

    /// Sets the rotation of the ring about its center, in degrees.
    #[must_use]
    pub fn with_rotation(mut self, rotate_angle: f64) -> Self {
        self.rotate_angle = rotate_angle;
        self
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

impl Primitive for MakeEllipticalArcRing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self) -> Result<()> {
        require_positive(NAME, "a_inner", self.a_inner)?;
        require_positive(NAME, "b_inner", self.b_inner)?;
        require_positive(NAME, "a_outer", self.a_outer)?;
        require_positive(NAME, "b_outer", self.b_outer)?;
        require_positive(NAME, "angle_resolution", self.angle_resolution)
    }

    fn boundary(&self) -> Result<Vec<PointChain>> {
        let arc = |a, b| sample_ellipse_arc(a, b, self.theta_start, self.theta_stop, self.angle_resolution);
        let outer = arc(self.a_outer, self.b_outer)?;
        let inner = arc(self.a_inner, self.b_inner)?;
        Ok(vec![outer, inner.reversed()])
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
    use crate::geometry::PointSet;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn half_ring_outer_then_inner() {
        let poly = MakeEllipticalArcRing::new(8.0, 4.0, 10.0, 6.0)
            .with_angles(0.0, 180.0)
            .with_resolution(1.0)
            .polygon()
            .unwrap();
        assert_eq!(poly.len(), 2 * 181);
        let pts = poly.points();
        assert_abs_diff_eq!(pts[0].x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[90].y, 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[180].x, -10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[181].x, -8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pts[361].x, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn full_ring_area() {
        let poly = MakeEllipticalArcRing::new(8.0, 4.0, 10.0, 6.0)
            .with_resolution(0.1)
            .polygon()
            .unwrap();
        assert_abs_diff_eq!(poly.area(), PI * (60.0 - 32.0), epsilon = 1e-3);
    }

    #[test]
    fn rotates_about_center() {
        let center = Point2::new(5.0, -5.0);
        let poly = MakeEllipticalArcRing::new(2.0, 1.0, 3.0, 2.0)
            .with_angles(0.0, 90.0)
            .with_rotation(90.0)
            .with_center(center)
            .polygon()
            .unwrap();
        // Outer start (a_outer, 0) ends up a_outer above the center.
        let first = poly.points()[0];
        assert_abs_diff_eq!(first.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(first.y, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn descending_angles_are_accepted() {
        let fwd = MakeEllipticalArcRing::new(2.0, 1.0, 3.0, 2.0)
            .with_angles(0.0, 90.0)
            .polygon()
            .unwrap();
        let rev = MakeEllipticalArcRing::new(2.0, 1.0, 3.0, 2.0)
            .with_angles(90.0, 0.0)
            .polygon()
            .unwrap();
        assert_eq!(fwd.len(), rev.len());
        assert_abs_diff_eq!(fwd.area(), rev.area(), epsilon = 1e-9);
        assert!(fwd.signed_area() * rev.signed_area() < 0.0);
    }

    #[test]
    fn non_positive_axis_is_rejected() {
        assert!(MakeEllipticalArcRing::new(0.0, 1.0, 3.0, 2.0).polygon().is_err());
        assert!(MakeEllipticalArcRing::new(2.0, 1.0, 3.0, -2.0).polygon().is_err());
    }
}
