//! # Journal Crate
//!
//! A journal of text entries and the separate component that persists it.
//!
//! ## Example Usage
//!
//! ```ignore
//! use journal::{Journal, PersistenceManager};
//! use std::path::Path;
//!
//! let mut journal = Journal::new("Dear Diary");
//! journal.add("I ate a bug").add("I cried today");
//! PersistenceManager::save(&journal, Path::new("diary.txt"))?;
//! ```

pub mod error;
pub mod journal;
pub mod persistence;

pub use error::{JournalError, Result};
pub use journal::Journal;
pub use persistence::PersistenceManager;
