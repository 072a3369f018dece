pub mod assemble;
pub mod creation;
pub mod transform;
