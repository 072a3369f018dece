use crate::error::{Result, ShapeError};
use crate::geometry::PointChain;
use crate::layout::Layer;
use crate::math::sampling::sample_arc;
use crate::math::Point2;

use super::{require_positive, Placement, Primitive};

const NAME: &str = "ring arc";

/// Annular arc of a circular ring.
///
/// The inner (`radius - width / 2`) and outer (`radius + width / 2`) edges are
/// sampled at the same angles; the boundary is the inner edge forward followed
/// by the outer edge reversed.
#[derive(Debug, Clone, PartialEq)]
pub struct MakeRingArc {
    radius: f64,
    width: f64,
    theta_start: f64,
    theta_stop: f64,
    angle_resolution: f64,
    center: Point2,
    layer: Layer,
}

impl Default for MakeRingArc {
    fn default() -> Self {
        Self {
            radius: 10.0,
            width: 0.5,
            theta_start: 0.0,
            theta_stop: 90.0,
            angle_resolution: 2.5,
            center: Point2::origin(),
            layer: Layer::default(),
        }
    }
}

impl MakeRingArc {
    /// Creates a new `MakeRingArc` operation spanning the default 0..90 degrees.
    #[must_use]
    pub fn new(radius: f64, width: f64) -> Self {
        Self {
            radius,
            width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the angular span, in degrees.
    #[must_use]
    pub fn with_angles(mut self, theta_start: f64, theta_stop: f64) -> Self {
        self.theta_start = theta_start;
        self.theta_stop = theta_stop;
        self
    }

    /// Sets the angular step between samples, in degrees.
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

    /// Inner and outer edge chains, origin-centered.
    fn edges(&self) -> Result<(PointChain, PointChain)> {
        let half = self.width / 2.0;
        let arc = |r| sample_arc(r, self.theta_start, self.theta_stop, self.angle_resolution);
        Ok((arc(self.radius - half)?, arc(self.radius + half)?))
    }
}

impl Primitive for MakeRingArc {
    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self) -> Result<()> {
        require_positive(NAME, "radius", self.radius)?;
        require_positive(NAME, "width", self.width)?;
        require_positive(NAME, "angle_resolution", self.angle_resolution)?;
        if self.theta_stop < self.theta_start {
            return Err(ShapeError::InvalidParameter {
                shape: NAME,
                parameter: "theta_stop",
                value: self.theta_stop,
                requirement: "must be >= theta_start",
            }
            .into());
        }
        Ok(())
    }

    fn boundary(&self) -> Result<Vec<PointChain>> {
        let (inner, outer) = self.edges()?;
        Ok(vec![inner, outer.reversed()])
    }

    fn placement(&self) -> Placement {
        Placement::at(self.center)
    }

    fn layer(&self) -> Layer {
        self.layer
    }
}
