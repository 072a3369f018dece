use std::fmt;

/// A GDS layer/datatype pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layer {
    pub layer: u16,
    pub datatype: u16,
}

impl Layer {
    /// Creates a new layer tag.
    #[must_use]
    pub const fn new(layer: u16, datatype: u16) -> Self {
        Self { layer, datatype }
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl From<(u16, u16)> for Layer {
    fn from((layer, datatype): (u16, u16)) -> Self {
        Self::new(layer, datatype)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.layer, self.datatype)
    }
}
