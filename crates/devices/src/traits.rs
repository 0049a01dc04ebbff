//! Role traits for document devices.
//!
//! Each capability is its own trait, so a client that only prints depends
//! on `Printer` alone and never sees scanning.

use crate::document::Document;

/// Something that can print documents.
pub trait Printer {
    fn print(&self, docs: &[&Document]);
}

/// Something that can scan documents.
pub trait Scanner {
    fn scan(&self, docs: &[&Document]);
}

/// A device offering every role.
///
/// Implemented automatically for anything that is both a `Printer` and a
/// `Scanner`.
pub trait MultiFunctionDevice: Printer + Scanner {}

impl<T: Printer + Scanner> MultiFunctionDevice for T {}
