//! Optical field analysis.

pub mod overlap;

pub use overlap::{overlap, real_field, Overlap};
