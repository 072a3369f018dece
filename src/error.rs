use thiserror::Error;

/// Top-level error type for the AWG layout library.
#[derive(Debug, Error)]
pub enum AwgError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Errors related to point chains and polygon assembly.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("point chain needs at least 2 points, got {0}")]
    ChainTooShort(usize),

    #[error("degenerate geometry: only {distinct} distinct point(s), a polygon needs 3")]
    Degenerate { distinct: usize },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while validating shape parameters, before any sampling.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("{shape}: {parameter} = {value} {requirement}")]
    InvalidParameter {
        shape: &'static str,
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error("s-bend: radius = {radius} must be >= {radius_min}")]
    BendRadiusTooSmall { radius: f64, radius_min: f64 },
}

/// Errors related to the layout container.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("port {0:?} already exists")]
    DuplicatePort(String),

    #[error("polygon not found")]
    PolygonNotFound,
}

/// Errors related to field analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("field {field} has {actual} samples but x has {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Convenience type alias for results using [`AwgError`].
pub type Result<T> = std::result::Result<T, AwgError>;
