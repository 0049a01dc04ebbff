//! # Catalog Crate
//!
//! Owns the products that specifications are evaluated against.
//!
//! ## Main Components
//!
//! - **types**: `Product`, its `Color` and `Size` attributes, and `Catalog`
//! - **parser**: Parse `name::color::size` catalog files
//! - **load**: `Catalog::load_from_file`
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("products.dat"))?;
//! for product in catalog.items() {
//!     println!("{} ({}, {})", product.name, product.color, product.size);
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod load;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Color, Product, Size};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.items().is_empty());
    }

    #[test]
    fn test_insert_product() {
        let mut catalog = Catalog::new();
        catalog.insert(Product::new("Car", Color::Red, Size::Medium));

        let retrieved = catalog.get("Car").unwrap();
        assert_eq!(retrieved.color, Color::Red);
        assert_eq!(retrieved.size, Size::Medium);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_items_borrow_catalog_products() {
        let catalog = Catalog::sample();
        let items = catalog.items();
        assert_eq!(items.len(), 3);
        assert!(std::ptr::eq(items[1], catalog.get("Tree").unwrap()));
    }
}
