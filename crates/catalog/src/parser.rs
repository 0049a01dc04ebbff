//! Parser for product catalog files.
//!
//! Format, one product per line:
//! - `name::color::size`, e.g. `Apple::green::small`
//!
//! Blank lines and lines starting with `#` are ignored. Color and size are
//! matched case-insensitively.

use crate::error::{CatalogError, Result};
use crate::types::*;
use rayon::prelude::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

const FIELD_COUNT: usize = 3;

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(err),
    })?;

    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Parse a single `name::color::size` line.
///
/// `file` and `line_no` are only used to give errors some context.
pub fn parse_product_line(line: &str, file: &str, line_no: usize) -> Result<Product> {
    let parts: Vec<&str> = line.split("::").collect();
    if parts.len() != FIELD_COUNT {
        return Err(CatalogError::FieldCountMismatch {
            file: file.to_string(),
            line: line_no,
            expected: FIELD_COUNT,
            found: parts.len(),
        });
    }

    let name = parts[0].trim();
    if name.is_empty() {
        return Err(CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Missing product name".to_string(),
        });
    }

    let color: Color = parse_attribute(parts[1], file, line_no)?;
    let size: Size = parse_attribute(parts[2], file, line_no)?;

    Ok(Product::new(name, color, size))
}

/// Parse a color or size, attaching the catalog position to any failure.
fn parse_attribute<A>(raw: &str, file: &str, line_no: usize) -> Result<A>
where
    A: FromStr<Err = CatalogError>,
{
    raw.parse().map_err(|err| match err {
        CatalogError::InvalidValue { field, value } => CatalogError::InvalidAttribute {
            file: file.to_string(),
            line: line_no,
            field,
            value,
        },
        other => other,
    })
}

/// Parse a catalog file into products, in file order.
///
/// Lines are parsed in parallel and gathered in file order. When several
/// lines are bad, the error for the lowest line number is returned.
pub fn parse_products(path: &Path) -> Result<Vec<Product>> {
    let lines = read_lines(path)?;
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let numbered: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let parsed: Vec<Result<Product>> = numbered
        .par_iter()
        .map(|&(line_no, line)| parse_product_line(line, &file, line_no))
        .collect();

    // Sequential pass so the first failing line always wins
    parsed.into_iter().collect()
}
