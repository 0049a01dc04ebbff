//! Error types for the catalog crate.
//!
//! Every failure here comes from reading a catalog file: the in-memory
//! catalog itself has no failing operations. Errors tied to a line of a
//! catalog file carry the file name and the 1-based line number.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read catalog: {0}")]
    IoError(#[from] std::io::Error),

    /// A line is structurally wrong (e.g. empty product name)
    #[error("line {line} of catalog {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A color or size string outside its fixed set, with no file context.
    ///
    /// Returned by the `FromStr` impls, e.g. for command-line arguments.
    #[error("unknown {field} '{value}'")]
    InvalidValue { field: String, value: String },

    /// A color or size outside its fixed set on a catalog line
    #[error("line {line} of catalog {file}: unknown {field} '{value}'")]
    InvalidAttribute {
        file: String,
        line: usize,
        field: String,
        value: String,
    },

    /// Line does not split into `name::color::size`
    #[error("line {line} of catalog {file}: expected {expected} `::`-separated fields, found {found}")]
    FieldCountMismatch {
        file: String,
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
