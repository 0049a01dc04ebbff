//! Writing journals to disk.

use crate::error::{JournalError, Result};
use crate::journal::Journal;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Saves journals as plain text, one entry per line.
pub struct PersistenceManager;

impl PersistenceManager {
    /// Write every entry of `journal` to `path`, each followed by `\n`.
    ///
    /// The file is created if missing and truncated otherwise. The title is
    /// not written.
    pub fn save(journal: &Journal, path: &Path) -> Result<()> {
        let io_err = |source| JournalError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        for entry in journal.entries() {
            writeln!(writer, "{entry}").map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;

        info!(
            "Saved journal '{}' ({} entries) to {}",
            journal.title(),
            journal.len(),
            path.display()
        );
        Ok(())
    }
}
