use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::layout::{Component, Layer, Port, ShapeSink};
use crate::math::Point2;

use super::{require_positive, MakeTaper, Primitive};

const NAME: &str = "mmi 1x2";

/// 1x2 multimode-interference splitter.
///
/// Input taper, rectangular multimode section and two output tapers, all on
/// one layer. Ports: `o1` input (facing 180 degrees), `o2` upper output and
/// `o3` lower output (facing 0 degrees). The input port sits at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct MakeMmi1x2 {
    width: f64,
    width_taper: f64,
    length_taper_in: f64,
    length_taper_out: f64,
    length_mmi: f64,
    width_mmi: f64,
    gap_mmi: f64,
    layer: Layer,
}

impl Default for MakeMmi1x2 {
    fn default() -> Self {
        Self {
            width: 1.0,
            width_taper: 2.0,
            length_taper_in: 10.0,
            length_taper_out: 20.0,
            length_mmi: 30.0,
            width_mmi: 10.0,
            gap_mmi: 2.0,
            layer: Layer::default(),
        }
    }
}

impl MakeMmi1x2 {
    /// Creates a new `MakeMmi1x2` operation with default dimensions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access waveguide width and the taper width at the MMI facets.
    #[must_use]
    pub fn with_widths(mut self, width: f64, width_taper: f64) -> Self {
        self.width = width;
        self.width_taper = width_taper;
        self
    }

    /// Sets the input and output taper lengths.
    #[must_use]
    pub fn with_taper_lengths(mut self, length_in: f64, length_out: f64) -> Self {
        self.length_taper_in = length_in;
        self.length_taper_out = length_out;
        self
    }

    /// Sets the multimode section size and the gap between output tapers.
    #[must_use]
    pub fn with_body(mut self, length_mmi: f64, width_mmi: f64, gap_mmi: f64) -> Self {
        self.length_mmi = length_mmi;
        self.width_mmi = width_mmi;
        self.gap_mmi = gap_mmi;
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    /// Lateral offset of each output taper axis.
    fn output_offset(&self) -> f64 {
        self.gap_mmi / 2.0 + self.width_taper / 2.0
    }

    fn parts(&self) -> [MakeTaper; 4] {
        let body_start = self.length_taper_in;
        let body_end = body_start + self.length_mmi;
        let y = self.output_offset();
        [
            MakeTaper::new(self.width, self.width_taper, self.length_taper_in),
            MakeTaper::new(self.width_mmi, self.width_mmi, self.length_mmi)
                .with_center(Point2::new(body_start, 0.0)),
            MakeTaper::new(self.width_taper, self.width, self.length_taper_out)
                .with_center(Point2::new(body_end, y)),
            MakeTaper::new(self.width_taper, self.width, self.length_taper_out)
                .with_center(Point2::new(body_end, -y)),
        ]
    }

    /// Emits all polygons and registers the three ports.
    ///
    /// Every part is built before anything is emitted, so a rejected
    /// parameter leaves `component` untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is not positive or a port name is
    /// already taken in `component`.
    pub fn execute(&self, component: &mut Component) -> Result<()> {
        require_positive(NAME, "width", self.width)?;
        require_positive(NAME, "width_taper", self.width_taper)?;
        require_positive(NAME, "length_taper_in", self.length_taper_in)?;
        require_positive(NAME, "length_taper_out", self.length_taper_out)?;
        require_positive(NAME, "length_mmi", self.length_mmi)?;
        require_positive(NAME, "width_mmi", self.width_mmi)?;
        require_positive(NAME, "gap_mmi", self.gap_mmi)?;

        let polygons = self
            .parts()
            .iter()
            .map(Primitive::polygon)
            .collect::<Result<Vec<_>>>()?;

        let end_x = self.length_taper_in + self.length_mmi + self.length_taper_out;
        let y = self.output_offset();
        let ports = [
            Port::new("o1", Point2::origin(), 180.0, self.width, self.layer),
            Port::new("o2", Point2::new(end_x, y), 0.0, self.width, self.layer),
            Port::new("o3", Point2::new(end_x, -y), 0.0, self.width, self.layer),
        ];
        if let Some(taken) = ports.iter().find(|p| component.port(&p.name).is_some()) {
            return Err(LayoutError::DuplicatePort(taken.name.clone()).into());
        }

        debug!(shape = NAME, layer = %self.layer, parts = polygons.len(), "emitting composite");
        for polygon in polygons {
            component.add_polygon(polygon, self.layer);
        }
        for port in ports {
            component.add_port(port)?;
        }
        Ok(())
    }

    /// Builds a fresh component holding the splitter.
    ///
    /// # Errors
    ///
    /// Same as [`MakeMmi1x2::execute`].
    pub fn component(&self) -> Result<Component> {
        let mut component = Component::new();
        self.execute(&mut component)?;
        Ok(component)
    }
}
