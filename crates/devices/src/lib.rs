//! # Devices Crate
//!
//! Small role traits for document devices (`Printer`, `Scanner`) and a
//! `Machine` that combines one of each by delegation.
//!
//! ## Example Usage
//!
//! ```ignore
//! use devices::{Document, LogPrinter, LogScanner, Machine, Printer, Scanner};
//!
//! let printer = LogPrinter::new();
//! let scanner = LogScanner::new();
//! let machine = Machine::new(&printer, &scanner);
//!
//! let doc = Document::new("report");
//! machine.print(&[&doc]);
//! machine.scan(&[&doc]);
//! ```

pub mod document;
pub mod traits;
pub mod machine;
pub mod log_devices;

pub use document::Document;
pub use log_devices::{LogPrinter, LogScanner};
pub use machine::Machine;
pub use traits::{MultiFunctionDevice, Printer, Scanner};
