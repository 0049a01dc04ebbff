//! Specification matching a product's size.

use crate::traits::Specification;
use catalog::{Product, Size};

/// Keeps products of one size.
#[derive(Debug, Clone, Copy)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn name(&self) -> &str {
        "SizeSpecification"
    }

    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn test_size_specification() {
        let catalog = Catalog::sample();
        let large = SizeSpecification::new(Size::Large);

        let matching: Vec<&str> = catalog
            .items()
            .into_iter()
            .filter(|p| large.is_satisfied(p))
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(matching, vec!["Tree", "House"]);
    }
}
