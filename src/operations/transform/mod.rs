//! Rigid placement of point chains and polygons.
//!
//! Every transform is pure: it returns a new value and preserves point order.
//! Rotate-then-translate is the placement idiom used by the shape constructors.

mod mirror;
mod rotate;
mod translate;

pub use mirror::Mirror;
pub use rotate::Rotate;
pub use translate::Translate;
