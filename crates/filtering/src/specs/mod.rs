//! Specification implementations.
//!
//! Generic building blocks (`AttributeEquals`, `AndSpecification`,
//! `AlwaysTrue`, `AlwaysFalse`) work over any item type; the color and
//! size specifications are specific to catalog products.

pub mod and;
pub mod attribute;
pub mod color;
pub mod constant;
pub mod size;

// Re-export for convenience
pub use and::AndSpecification;
pub use attribute::AttributeEquals;
pub use color::ColorSpecification;
pub use constant::{AlwaysFalse, AlwaysTrue};
pub use size::SizeSpecification;
