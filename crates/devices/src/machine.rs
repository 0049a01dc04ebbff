//! A multi-function device assembled from single-role devices.

use crate::document::Document;
use crate::traits::{Printer, Scanner};

/// Forwards each operation to the device that owns that role.
///
/// Borrows its parts rather than owning them, the same way
/// `AndSpecification` borrows its operands.
pub struct Machine<'a> {
    printer: &'a dyn Printer,
    scanner: &'a dyn Scanner,
}

impl<'a> Machine<'a> {
    pub fn new(printer: &'a dyn Printer, scanner: &'a dyn Scanner) -> Self {
        Self { printer, scanner }
    }
}

impl Printer for Machine<'_> {
    fn print(&self, docs: &[&Document]) {
        self.printer.print(docs);
    }
}

impl Scanner for Machine<'_> {
    fn scan(&self, docs: &[&Document]) {
        self.scanner.scan(docs);
    }
}
