//! Specification-based filtering of catalog items.
//!
//! This crate provides:
//! - `Specification` and `Filter` traits
//! - Specifications: attribute equality, color, size, conjunction, constants
//! - `BetterFilter`, a single filter that accepts any specification
//! - `FilterPipeline` for running owned specifications stage by stage
//!
//! New selection criteria are new `Specification` types; `BetterFilter`
//! never changes to accommodate them.
//!
//! ## Example Usage
//! ```ignore
//! use filtering::{BetterFilter, Filter};
//! use filtering::specs::*;
//!
//! let green = ColorSpecification::new(Color::Green);
//! let large = SizeSpecification::new(Size::Large);
//! let green_and_large = AndSpecification::new(&green, &large);
//!
//! let items = catalog.items();
//! let trees = BetterFilter.filter(&items, &green_and_large);
//! ```

pub mod traits;
pub mod specs;
pub mod better_filter;
pub mod filter_pipeline;

// Re-export main types
pub use better_filter::BetterFilter;
pub use filter_pipeline::FilterPipeline;
pub use traits::{Filter, Specification};
