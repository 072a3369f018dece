pub mod polygon_2d;
pub mod quadrature;
pub mod sampling;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation type.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns whether two points coincide within [`TOLERANCE`].
#[must_use]
pub fn coincident(a: &Point2, b: &Point2) -> bool {
    (a - b).norm() < TOLERANCE
}
