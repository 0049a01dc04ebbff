//! Equality test on one attribute of an item.

use crate::traits::Specification;

/// Matches items whose selected attribute equals a fixed value.
///
/// ## Usage
/// ```ignore
/// let named_tree = AttributeEquals::new("name", |p: &Product| p.name.clone(), "Tree".to_string());
/// ```
pub struct AttributeEquals<T, V> {
    attribute: &'static str,
    selector: fn(&T) -> V,
    value: V,
}

impl<T, V> AttributeEquals<T, V> {
    /// Create a new AttributeEquals.
    ///
    /// # Arguments
    /// * `attribute` - Attribute name, used as the specification name
    /// * `selector` - Reads the attribute from an item
    /// * `value` - Value the attribute must equal
    pub fn new(attribute: &'static str, selector: fn(&T) -> V, value: V) -> Self {
        Self {
            attribute,
            selector,
            value,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<T, V> Specification<T> for AttributeEquals<T, V>
where
    V: PartialEq + Send + Sync,
{
    fn name(&self) -> &str {
        self.attribute
    }

    fn is_satisfied(&self, item: &T) -> bool {
        (self.selector)(item) == self.value
    }
}
