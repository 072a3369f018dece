//! In-memory layout container that receives emitted polygons.

mod layer;
mod port;

pub use layer::Layer;
pub use port::Port;

use slotmap::SlotMap;

use crate::error::{LayoutError, Result};
use crate::geometry::{PointSet, Polygon};
use crate::math::polygon_2d::bounds;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a polygon in a component.
    pub struct PolygonId;
}

/// Destination for emitted shape polygons.
///
/// Shape constructors write to a sink and never read back from it.
pub trait ShapeSink {
    /// Handle returned for each stored polygon.
    type Handle;

    /// Stores a polygon on the given layer.
    fn add_polygon(&mut self, polygon: Polygon, layer: Layer) -> Self::Handle;
}

/// A polygon placed on a layer.
#[derive(Debug, Clone)]
pub struct PolygonData {
    pub polygon: Polygon,
    pub layer: Layer,
}

impl PolygonData {
    /// Returns the polygon vertices.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        self.polygon.points()
    }
}

/// A layout cell holding polygons and ports.
#[derive(Debug, Default)]
pub struct Component {
    polygons: SlotMap<PolygonId, PolygonData>,
    ports: Vec<Port>,
}

impl Component {
    /// Creates a new, empty component.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the polygon data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::PolygonNotFound` if the id is stale or foreign.
    pub fn polygon(&self, id: PolygonId) -> Result<&PolygonData> {
        self.polygons
            .get(id)
            .ok_or_else(|| LayoutError::PolygonNotFound.into())
    }

    /// Iterates over all stored polygons.
    pub fn polygons(&self) -> impl Iterator<Item = (PolygonId, &PolygonData)> {
        self.polygons.iter()
    }

    /// Returns the number of stored polygons.
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Registers a port.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::DuplicatePort` if a port with the same name exists.
    pub fn add_port(&mut self, port: Port) -> Result<()> {
        if self.ports.iter().any(|p| p.name == port.name) {
            return Err(LayoutError::DuplicatePort(port.name).into());
        }
        self.ports.push(port);
        Ok(())
    }

    /// Looks up a port by name.
    #[must_use]
    pub fn port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name == name)
    }

    /// Returns all ports in registration order.
    #[must_use]
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Axis-aligned bounds over every polygon, or `None` for an empty component.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Point2, Point2)> {
        let corners: Vec<Point2> = self
            .polygons
            .values()
            .flat_map(|data| {
                let (min, max) = data.polygon.bounds();
                [min, max]
            })
            .collect();
        bounds(&corners)
    }
}

impl ShapeSink for Component {
    type Handle = PolygonId;

    fn add_polygon(&mut self, polygon: Polygon, layer: Layer) -> PolygonId {
        self.polygons.insert(PolygonData { polygon, layer })
    }
}

/// Collects polygons without layer bookkeeping; handy for batch generation.
impl ShapeSink for Vec<(Polygon, Layer)> {
    type Handle = usize;

    fn add_polygon(&mut self, polygon: Polygon, layer: Layer) -> usize {
        self.push((polygon, layer));
        self.len() - 1
    }
}
