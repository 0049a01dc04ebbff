//! The FilterPipeline runs several specifications in sequence.
//!
//! Each stage narrows the output of the previous one, so a pipeline is
//! equivalent to filtering once with the conjunction of all its stages.

use crate::better_filter::BetterFilter;
use crate::traits::{Filter, Specification};
use tracing;

/// Chains owned specifications into a multi-stage filter.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_spec(ColorSpecification::new(Color::Green))
///     .add_spec(SizeSpecification::new(Size::Large));
///
/// let filtered = pipeline.apply(catalog.items());
/// ```
pub struct FilterPipeline<T> {
    specs: Vec<Box<dyn Specification<T>>>,
}

impl<T> FilterPipeline<T> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_spec(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Apply all stages in order.
    ///
    /// An empty pipeline returns `items` unchanged.
    pub fn apply<'a>(&self, items: Vec<&'a T>) -> Vec<&'a T> {
        let filter = BetterFilter;
        let mut current = items;
        for spec in &self.specs {
            tracing::debug!(
                "Applying specification: {} (input count: {})",
                spec.name(),
                current.len()
            );
            current = filter.filter(&current, spec.as_ref());
            tracing::debug!(
                "Specification applied: {} (output count: {})",
                spec.name(),
                current.len()
            );
        }
        current
    }
}

impl<T> Default for FilterPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
