use crate::math::Point2;

use super::Layer;

/// An optical port on a component boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    /// Unique name within the component, e.g. `"o1"`.
    pub name: String,
    /// Midpoint of the port face.
    pub center: Point2,
    /// Direction the port faces, in degrees (0 = +x).
    pub orientation: f64,
    /// Waveguide width at the port.
    pub width: f64,
    pub layer: Layer,
}

impl Port {
    /// Creates a new port.
    #[must_use]
    pub fn new(name: impl Into<String>, center: Point2, orientation: f64, width: f64, layer: Layer) -> Self {
        Self {
            name: name.into(),
            center,
            orientation,
            width,
            layer,
        }
    }
}
