//! Core traits for specification-based filtering.
//!
//! A `Specification` decides whether one item matches; a `Filter` applies a
//! specification to a sequence of items. Neither knows how the other is
//! built, so new criteria are added as new specifications without touching
//! any filter.

/// A boolean test over a single item.
///
/// ## Design Note
/// - `Send + Sync` lets one specification be shared by filters running on
///   several threads over the same immutable items
/// - `is_satisfied` must be pure: no side effects, no state beyond what was
///   captured at construction
pub trait Specification<T>: Send + Sync {
    /// Returns the name of this specification (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `item` matches this specification.
    fn is_satisfied(&self, item: &T) -> bool;
}

/// Selects the items of a sequence that satisfy a specification.
pub trait Filter<T> {
    /// Returns the items for which `spec.is_satisfied` is true, in their
    /// original relative order.
    ///
    /// # Arguments
    /// * `items` - Borrowed items to test; neither they nor the slice are modified
    /// * `spec` - Any specification over `T`
    ///
    /// # Returns
    /// A new vector of references into `items`
    fn filter<'a>(&self, items: &[&'a T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}
