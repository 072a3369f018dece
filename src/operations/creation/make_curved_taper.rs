use crate::error::{Result, ShapeError};
use crate::geometry::PointChain;
use crate::layout::Layer;
use crate::math::sampling::sample_power_taper;
use crate::math::{Point2, Vector2};
use crate::operations::transform::{Rotate, Translate};

use super::{require_positive, Placement, Primitive};

const NAME: &str = "curved taper";

/// Taper whose width follows a power law.
///
/// The profile is sampled as `w(x) = alpha * (L - x)^m + w2` with
/// `alpha = (w1 - w2) / L^m`, then turned half a revolution and shifted by
/// `L` so the `w2` end sits on the anchor point. In placed coordinates the
/// width is therefore `w2 + (w1 - w2) * (s / L)^m` at distance `s` from the
/// anchor along the taper axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MakeCurvedTaper {
    m: f64,
    w1: f64,
    w2: f64,
    length: f64,
    n_points: usize,
    rotate_angle: f64,
    center: Point2,
    layer: Layer,
}

impl Default for MakeCurvedTaper {
    fn default() -> Self {
        Self {
            m: 2.0,
            w1: 1.0,
            w2: 2.0,
            length: 10.0,
            n_points: 100,
            rotate_angle: 0.0,
            center: Point2::origin(),
            layer: Layer::default(),
        }
    }
}

impl MakeCurvedTaper {
    /// Creates a new `MakeCurvedTaper` operation with exponent `m`.
    #[must_use]
    pub fn new(m: f64, w1: f64, w2: f64, length: f64) -> Self {
        Self {
            m,
            w1,
            w2,
            length,
            ..Self::default()
        }
    }

    /// Sets the number of samples along each edge.
    #[must_use]
    pub fn with_points(mut self, n_points: usize) -> Self {
        self.n_points = n_points;
        self
    }

    /// Sets the direction of the taper axis, in degrees.
    #[must_use]
    pub fn with_rotation(mut self, rotate_angle: f64) -> Self {
        self.rotate_angle = rotate_angle;
        self
    }

    /// Sets the anchor point (midpoint of the `w2` edge).
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

impl Primitive for MakeCurvedTaper {
    fn name(&self) -> &'static str {
        NAME
    }

    #[allow(clippy::cast_precision_loss)]
    fn validate(&self) -> Result<()> {
        require_positive(NAME, "w1", self.w1)?;
        require_positive(NAME, "w2", self.w2)?;
        require_positive(NAME, "length", self.length)?;
        if !(self.m.is_finite() && self.m >= 0.0) {
            return Err(ShapeError::InvalidParameter {
                shape: NAME,
                parameter: "m",
                value: self.m,
                requirement: "must be finite and >= 0",
            }
            .into());
        }
        if self.n_points < 2 {
            return Err(ShapeError::InvalidParameter {
                shape: NAME,
                parameter: "n_points",
                value: self.n_points as f64,
                requirement: "must be >= 2",
            }
            .into());
        }
        Ok(())
    }

    fn boundary(&self) -> Result<Vec<PointChain>> {
        let (upper, lower) = sample_power_taper(self.w1, self.w2, self.length, self.m, self.n_points)?;
        let flip = Rotate::about_origin(180.0);
        let shift = Translate::new(Vector2::new(self.length, 0.0));
        Ok([upper, lower.reversed()]
            .iter()
            .map(|chain| shift.apply(&flip.apply(chain)))
            .collect())
    }

    fn placement(&self) -> Placement {
        Placement::rotated(self.rotate_angle, self.center)
    }

    fn layer(&self) -> Layer {
        self.layer
    }
}
