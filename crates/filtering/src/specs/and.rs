//! Conjunction of two specifications.

use crate::traits::Specification;

/// Satisfied when both operands are.
///
/// Borrows its operands rather than owning them, so the same
/// specification can take part in several combinations. The borrow
/// checker keeps the operands alive for as long as the conjunction.
pub struct AndSpecification<'a, T> {
    first: &'a dyn Specification<T>,
    second: &'a dyn Specification<T>,
}

impl<'a, T> AndSpecification<'a, T> {
    pub fn new(first: &'a dyn Specification<T>, second: &'a dyn Specification<T>) -> Self {
        Self { first, second }
    }
}

impl<T> Specification<T> for AndSpecification<'_, T> {
    fn name(&self) -> &str {
        "AndSpecification"
    }

    fn is_satisfied(&self, item: &T) -> bool {
        // `second` is skipped when `first` already fails
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{AlwaysFalse, AlwaysTrue, ColorSpecification, SizeSpecification};
    use catalog::{Catalog, Color, Product, Size};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSpecification {
        calls: AtomicUsize,
    }

    impl Specification<Product> for CountingSpecification {
        fn name(&self) -> &str {
            "CountingSpecification"
        }

        fn is_satisfied(&self, _item: &Product) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    #[test]
    fn test_and_matches_both() {
        let catalog = Catalog::sample();
        let green = ColorSpecification::new(Color::Green);
        let large = SizeSpecification::new(Size::Large);
        let green_and_large = AndSpecification::new(&green, &large);

        for product in catalog.items() {
            assert_eq!(
                green_and_large.is_satisfied(product),
                green.is_satisfied(product) && large.is_satisfied(product)
            );
        }
        assert!(green_and_large.is_satisfied(catalog.get("Tree").unwrap()));
    }

    #[test]
    fn test_and_truth_table() {
        let product = Product::new("Apple", Color::Green, Size::Small);

        assert!(AndSpecification::<Product>::new(&AlwaysTrue, &AlwaysTrue).is_satisfied(&product));
        assert!(!AndSpecification::<Product>::new(&AlwaysTrue, &AlwaysFalse).is_satisfied(&product));
        assert!(!AndSpecification::<Product>::new(&AlwaysFalse, &AlwaysTrue).is_satisfied(&product));
        assert!(!AndSpecification::<Product>::new(&AlwaysFalse, &AlwaysFalse).is_satisfied(&product));
    }

    #[test]
    fn test_and_skips_second_when_first_fails() {
        let product = Product::new("Apple", Color::Green, Size::Small);
        let counter = CountingSpecification {
            calls: AtomicUsize::new(0),
        };

        let failing_first = AndSpecification::<Product>::new(&AlwaysFalse, &counter);
        assert!(!failing_first.is_satisfied(&product));
        assert_eq!(counter.calls.load(Ordering::SeqCst), 0);

        let passing_first = AndSpecification::<Product>::new(&AlwaysTrue, &counter);
        assert!(passing_first.is_satisfied(&product));
        assert_eq!(counter.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_nested_and() {
        let product = Product::new("Tree", Color::Green, Size::Large);
        let green = ColorSpecification::new(Color::Green);
        let large = SizeSpecification::new(Size::Large);
        let inner = AndSpecification::new(&green, &large);
        let outer = AndSpecification::new(&inner, &AlwaysTrue);

        assert!(outer.is_satisfied(&product));
    }
}
