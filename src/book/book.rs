//! Top-level book representation

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::item::{BookItem, Chapter};

/// A fully loaded book as supplied by the host tool.
///
/// `sections` is required on the wire. Any other top-level field the
/// host includes is captured in `rest` and round-tripped untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Top-level sections in reading order
    pub sections: Vec<BookItem>,

    /// Host fields this preprocessor does not interpret
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Book {
    /// Returns mutable access to the first section, if the book has any
    pub fn first_section_mut(&mut self) -> Option<&mut BookItem> {
        self.sections.first_mut()
    }

    /// Iterates over the top-level chapters, skipping separators and
    /// part titles
    pub fn chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.sections.iter().filter_map(BookItem::as_chapter)
    }
}
