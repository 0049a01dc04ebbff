//! Core domain types for the product catalog.
//!
//! Products carry a fixed set of attributes that specifications can test:
//! a name, a color and a size. The `Catalog` owns products and lends them
//! out as references so that filtering never copies or mutates them.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Attribute Types
// =============================================================================

/// Product color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

/// Product size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl FromStr for Color {
    type Err = CatalogError;

    /// Parses `red`, `green` or `blue`, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(CatalogError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    /// Parses `small`, `medium` or `large`, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(CatalogError::InvalidValue {
                field: "size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered, owning collection of products.
///
/// Insertion order is preserved; `items()` hands out borrowed views in that
/// order, which is the shape the filters consume.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) products: Vec<Product>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// The three-product catalog used by the `demo` command and tests:
    /// a small green apple, a large green tree and a large blue house.
    pub fn sample() -> Self {
        let mut catalog = Self::new();
        catalog.insert(Product::new("Apple", Color::Green, Size::Small));
        catalog.insert(Product::new("Tree", Color::Green, Size::Large));
        catalog.insert(Product::new("House", Color::Blue, Size::Large));
        catalog
    }

    /// Append a product at the end of the catalog
    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
    }

    /// First product with exactly this name
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Borrowed view over every product, in insertion order
    pub fn items(&self) -> Vec<&Product> {
        self.products.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_str_ignores_case() {
        assert_eq!("Green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!(" BLUE ".parse::<Color>().unwrap(), Color::Blue);
        assert!(matches!(
            "purple".parse::<Color>(),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_invalid_value_is_reported_trimmed() {
        match " huge ".parse::<Size>() {
            Err(CatalogError::InvalidValue { field, value }) => {
                assert_eq!(field, "size");
                assert_eq!(value, "huge");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_size_display_round_trips_through_from_str() {
        for size in [Size::Small, Size::Medium, Size::Large] {
            assert_eq!(size.to_string().parse::<Size>().unwrap(), size);
        }
    }

    #[test]
    fn test_sample_catalog_order() {
        let catalog = Catalog::sample();
        let names: Vec<&str> = catalog.items().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Tree", "House"]);
    }

    #[test]
    fn test_get_missing_product() {
        let catalog = Catalog::sample();
        assert!(catalog.get("Car").is_none());
        assert_eq!(catalog.get("Tree").unwrap().size, Size::Large);
    }
}
