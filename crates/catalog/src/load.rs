//! Building a Catalog from a file on disk.

use crate::error::Result;
use crate::parser;
use crate::types::Catalog;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load every product listed in a `name::color::size` catalog file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let products = parser::parse_products(path)?;
        info!("Loaded {} products from {}", products.len(), path.display());
        Ok(products.into_iter().collect())
    }
}
