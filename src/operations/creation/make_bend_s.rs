use crate::error::{Result, ShapeError};
use crate::geometry::PointChain;
use crate::layout::Layer;
use crate::math::sampling::sample_arc;
use crate::math::{Point2, Vector2};
use crate::operations::transform::{Mirror, Translate};

use super::{require_positive, Placement, Primitive};

const NAME: &str = "s-bend";

/// Which way an S-bend climbs from its start point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BendDirection {
    /// Ends at `(span, +height)`.
    Up,
    /// Ends at `(span, -height)`; the mirror image of `Up` across the start axis.
    Down,
}

impl BendDirection {
    /// Direction encoded by the sign of a signed height (zero counts as `Up`).
    #[must_use]
    pub fn from_height(height: f64) -> Self {
        if height >= 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// S-bend made of two tangent circular arcs of equal radius.
///
/// ```text
///             |<----- span ----->|
///                        ________ _
///                       /         ^
///                      /          | height
///    start ___________/          _v_
/// ```
///
/// Each arc sweeps `theta = 2 atan(height / span)` on radius
/// `R = span / (2 sin theta)`, so the centerline leaves and arrives horizontal
/// and the tangent is continuous where the arcs meet.
#[derive(Debug, Clone, PartialEq)]
pub struct MakeSBend {
    span: f64,
    height: f64,
    direction: BendDirection,
    width: f64,
    angle_resolution: f64,
    radius_min: f64,
    start: Point2,
    layer: Layer,
}

impl Default for MakeSBend {
    fn default() -> Self {
        Self {
            span: 0.5,
            height: 10.0,
            direction: BendDirection::Up,
            width: 0.5,
            angle_resolution: 2.5,
            radius_min: 10.0,
            start: Point2::origin(),
            layer: Layer::default(),
        }
    }
}

impl MakeSBend {
    /// Creates a new `MakeSBend` operation.
    ///
    /// * `span` - Horizontal extent of the bend.
    /// * `height` - Vertical offset; its sign selects the [`BendDirection`].
    /// * `width` - Waveguide width.
    #[must_use]
    pub fn new(span: f64, height: f64, width: f64) -> Self {
        Self {
            span,
            height: height.abs(),
            direction: BendDirection::from_height(height),
            width,
            ..Self::default()
        }
    }

    /// Overrides the direction independently of the height sign.
    #[must_use]
    pub fn with_direction(mut self, direction: BendDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the smallest arc radius the bend may use.
    #[must_use]
    pub fn with_radius_min(mut self, radius_min: f64) -> Self {
        self.radius_min = radius_min;
        self
    }

    #[must_use]
    pub fn with_resolution(mut self, angle_resolution: f64) -> Self {
        self.angle_resolution = angle_resolution;
        self
    }

    /// Sets the start point (centerline at the bend entrance).
    #[must_use]
    pub fn with_start(mut self, start: Point2) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    #[must_use]
    pub fn direction(&self) -> BendDirection {
        self.direction
    }

    /// Angle swept by each arc, in radians.
    #[must_use]
    pub fn bend_angle(&self) -> f64 {
        2.0 * (self.height / self.span).atan()
    }

    /// Centerline radius of both arcs.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.span / self.bend_angle().sin() / 2.0
    }

    /// Chains for the upward layout, first arc centered at `(0, R)`.
    fn upward_chains(&self) -> Result<Vec<PointChain>> {
        let theta = self.bend_angle();
        let radius = self.radius();
        let sweep = theta.to_degrees();
        let half = self.width / 2.0;

        let first_center = Vector2::new(0.0, radius);
        let second_center = first_center + Vector2::new(theta.sin(), -theta.cos()) * (2.0 * radius);

        let arc = |r: f64, start: f64, center: Vector2| -> Result<PointChain> {
            let chain = sample_arc(r, start, start + sweep, self.angle_resolution)?;
            Ok(Translate::new(center).apply(&chain))
        };
        let inner_1 = arc(radius - half, -90.0, first_center)?;
        let outer_1 = arc(radius + half, -90.0, first_center)?;
        let inner_2 = arc(radius - half, 90.0, second_center)?;
        let outer_2 = arc(radius + half, 90.0, second_center)?;

        Ok(vec![inner_1, outer_2.reversed(), inner_2, outer_1.reversed()])
    }
}

impl Primitive for MakeSBend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self) -> Result<()> {
        require_positive(NAME, "span", self.span)?;
        require_positive(NAME, "height", self.height)?;
        require_positive(NAME, "width", self.width)?;
        require_positive(NAME, "angle_resolution", self.angle_resolution)?;
        let radius = self.radius();
        if radius < self.radius_min {
            return Err(ShapeError::BendRadiusTooSmall {
                radius,
                radius_min: self.radius_min,
            }
            .into());
        }
        Ok(())
    }

    fn boundary(&self) -> Result<Vec<PointChain>> {
        let chains = self.upward_chains()?;
        match self.direction {
            BendDirection::Up => Ok(chains),
            BendDirection::Down => {
                let mirror = Mirror::x_axis();
                chains.iter().map(|chain| mirror.apply(chain)).collect()
            }
        }
    }

    fn placement(&self) -> Placement {
        Placement::at(self.start)
    }

    fn layer(&self) -> Layer {
        self.layer
    }
}
