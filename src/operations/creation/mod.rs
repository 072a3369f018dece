//! Parametric shape constructors.
//!
//! Every primitive runs the same pipeline: validate parameters, sample its
//! boundary chains in a canonical frame, assemble them into a polygon, rotate
//! about the origin, translate into place and emit once to a [`ShapeSink`].
//! Validation always happens before any sampling, so a rejected shape emits
//! nothing.

mod make_bend_s;
mod make_curved_taper;
mod make_elliptical_arc_ring;
mod make_mmi1x2;
mod make_ring_arc;
mod make_sector;
mod make_taper;
mod make_waveguide;

pub use make_bend_s::{BendDirection, MakeSBend};
pub use make_curved_taper::MakeCurvedTaper;
pub use make_elliptical_arc_ring::MakeEllipticalArcRing;
pub use make_mmi1x2::MakeMmi1x2;
pub use make_ring_arc::MakeRingArc;
pub use make_sector::MakeSector;
pub use make_taper::MakeTaper;
pub use make_waveguide::MakeWaveguide;

use tracing::debug;

use crate::error::{Result, ShapeError};
use crate::geometry::{PointChain, Polygon};
use crate::layout::{Component, Layer, ShapeSink};
use crate::math::{Point2, Vector2};
use crate::operations::assemble::Assemble;
use crate::operations::transform::{Rotate, Translate};

/// Rigid placement applied to a canonically built boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Rotation about the canonical origin, in degrees.
    pub rotation: f64,
    /// Translation applied after the rotation.
    pub offset: Vector2,
}

impl Placement {
    /// Translation only.
    #[must_use]
    pub fn at(origin: Point2) -> Self {
        Self {
            rotation: 0.0,
            offset: origin.coords,
        }
    }

    /// Rotation about the canonical origin followed by a move to `origin`.
    #[must_use]
    pub fn rotated(rotation: f64, origin: Point2) -> Self {
        Self {
            rotation,
            offset: origin.coords,
        }
    }
}

/// A closed primitive shape built by the shared pipeline.
pub trait Primitive {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Checks geometric feasibility.
    ///
    /// # Errors
    ///
    /// Returns a `ShapeError` describing the first violated constraint.
    fn validate(&self) -> Result<()>;

    /// Boundary chains in the canonical frame, in winding-consistent order.
    ///
    /// Only called after [`Primitive::validate`] succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling fails.
    fn boundary(&self) -> Result<Vec<PointChain>>;

    /// Where the canonical boundary is placed.
    fn placement(&self) -> Placement;

    /// Layer the polygon is emitted on.
    fn layer(&self) -> Layer;

    /// Runs the pipeline without emitting.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the boundary is degenerate.
    fn polygon(&self) -> Result<Polygon> {
        build_polygon(self)
    }

    /// Runs the pipeline and emits the polygon to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the boundary is degenerate;
    /// nothing is emitted in that case.
    fn execute<S: ShapeSink>(&self, sink: &mut S) -> Result<S::Handle>
    where
        Self: Sized,
    {
        let polygon = self.polygon()?;
        debug!(
            shape = self.name(),
            layer = %self.layer(),
            points = polygon.len(),
            "emitting polygon"
        );
        Ok(sink.add_polygon(polygon, self.layer()))
    }

    /// Builds a fresh component holding just this shape.
    ///
    /// # Errors
    ///
    /// Same as [`Primitive::execute`].
    fn component(&self) -> Result<Component>
    where
        Self: Sized,
    {
        let mut component = Component::new();
        self.execute(&mut component)?;
        Ok(component)
    }
}

/// Validate, sample, assemble, then place.
fn build_polygon<P: Primitive + ?Sized>(shape: &P) -> Result<Polygon> {
    shape.validate()?;
    let canonical = Assemble::new(shape.boundary()?).execute()?;
    let placement = shape.placement();
    let rotated = Rotate::about_origin(placement.rotation).apply(&canonical);
    Ok(Translate::new(placement.offset).apply(&rotated))
}

/// Any primitive, as a tagged value.
#[derive(Debug, Clone)]
pub enum Shape {
    Taper(MakeTaper),
    CurvedTaper(MakeCurvedTaper),
    RingArc(MakeRingArc),
    Sector(MakeSector),
    SBend(MakeSBend),
    EllipticalArcRing(MakeEllipticalArcRing),
    Waveguide(MakeWaveguide),
}

impl Shape {
    fn inner(&self) -> &dyn Primitive {
        match self {
            Self::Taper(s) => s,
            Self::CurvedTaper(s) => s,
            Self::RingArc(s) => s,
            Self::Sector(s) => s,
            Self::SBend(s) => s,
            Self::EllipticalArcRing(s) => s,
            Self::Waveguide(s) => s,
        }
    }
}

impl Primitive for Shape {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn validate(&self) -> Result<()> {
        self.inner().validate()
    }

    fn boundary(&self) -> Result<Vec<PointChain>> {
        self.inner().boundary()
    }

    fn placement(&self) -> Placement {
        self.inner().placement()
    }

    fn layer(&self) -> Layer {
        self.inner().layer()
    }
}

macro_rules! shape_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(shape: $ty) -> Self {
                    Self::$variant(shape)
                }
            }
        )*
    };
}

shape_from! {
    Taper => MakeTaper,
    CurvedTaper => MakeCurvedTaper,
    RingArc => MakeRingArc,
    Sector => MakeSector,
    SBend => MakeSBend,
    EllipticalArcRing => MakeEllipticalArcRing,
    Waveguide => MakeWaveguide,
}

/// Fails unless `value` is strictly positive (NaN fails too).
pub(crate) fn require_positive(shape: &'static str, parameter: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::InvalidParameter {
            shape,
            parameter,
            value,
            requirement: "must be > 0",
        }
        .into())
    }
}
