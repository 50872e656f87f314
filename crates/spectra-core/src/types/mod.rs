//! Core type definitions

mod bounds;
mod transform;

pub use bounds::*;
pub use transform::*;
