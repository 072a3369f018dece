pub mod analysis;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod material;
pub mod math;
pub mod operations;

pub use error::{AwgError, Result};
