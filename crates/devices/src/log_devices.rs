//! Devices that report their work through `tracing`.

use crate::document::Document;
use crate::traits::{Printer, Scanner};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Logs each printed document and counts them.
#[derive(Debug, Default)]
pub struct LogPrinter {
    printed: AtomicUsize,
}

impl LogPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents printed so far
    pub fn printed(&self) -> usize {
        self.printed.load(Ordering::Relaxed)
    }
}

impl Printer for LogPrinter {
    fn print(&self, docs: &[&Document]) {
        for doc in docs {
            info!("Printing {}", doc.name);
        }
        self.printed.fetch_add(docs.len(), Ordering::Relaxed);
    }
}

/// Logs each scanned document and counts them.
#[derive(Debug, Default)]
pub struct LogScanner {
    scanned: AtomicUsize,
}

impl LogScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents scanned so far
    pub fn scanned(&self) -> usize {
        self.scanned.load(Ordering::Relaxed)
    }
}

impl Scanner for LogScanner {
    fn scan(&self, docs: &[&Document]) {
        for doc in docs {
            info!("Scanning {}", doc.name);
        }
        self.scanned.fetch_add(docs.len(), Ordering::Relaxed);
    }
}
