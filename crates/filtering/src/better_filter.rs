//! The general-purpose filter.

use crate::traits::{Filter, Specification};

/// Filter that works with any specification.
///
/// ## Algorithm
/// Single linear pass; keeps each item whose specification check passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a>(&self, items: &[&'a T], spec: &dyn Specification<T>) -> Vec<&'a T> {
        items
            .iter()
            .copied()
            .filter(|item| spec.is_satisfied(item))
            .collect()
    }
}
