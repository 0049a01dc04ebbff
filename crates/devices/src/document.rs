//! Documents handed to devices.

/// A named document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
