//! Specification matching a product's color.

use crate::traits::Specification;
use catalog::{Color, Product};

/// Keeps products of one color.
#[derive(Debug, Clone, Copy)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn name(&self) -> &str {
        "ColorSpecification"
    }

    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}
