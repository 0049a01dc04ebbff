//! A titled, append-only list of text entries.
//!
//! `Journal` only manages its entries. Writing them anywhere is the job of
//! `PersistenceManager`, so formatting or storage changes never touch this
//! type.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    title: String,
    entries: Vec<String>,
}

impl Journal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry. Returns `&mut Self` so calls can be chained.
    pub fn add(&mut self, entry: impl Into<String>) -> &mut Self {
        self.entries.push(entry.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Entries in the order they were added
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
