//! Math transforms and operators.

pub mod operators;
pub mod transform;

pub use operators::Binary;
pub use transform::Unary;
