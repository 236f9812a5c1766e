/// inferdemo - a generic sequence transform and a tour of type inference
///
/// This crate contains:
/// - `map` / `try_map`: order- and length-preserving sequence transforms
/// - The `Describe` capability and the sample records the demos use
/// - Demonstration drivers for local, composite, return-value and generic inference

pub mod demos;
pub mod describe;
pub mod error;
pub mod transform;

pub use describe::{Describe, print_input};
pub use error::{DemoError, DemoResult};
pub use transform::{MapOp, map, try_map};
