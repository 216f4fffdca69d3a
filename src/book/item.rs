//! Section entries within a book

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entry in a book's section list.
///
/// The wire format tags each entry with its kind: chapters arrive as
/// `{"Chapter": {...}}`, separators as the bare string `"Separator"`,
/// and part titles as `{"PartTitle": "..."}`. An entry matching none of
/// the known kinds fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BookItem {
    /// A chapter with markdown content
    Chapter(Chapter),

    /// A divider between groups of chapters
    Separator,

    /// A part heading above a group of chapters
    PartTitle(String),
}

impl BookItem {
    /// Returns the chapter payload, if this entry is a chapter
    pub fn as_chapter(&self) -> Option<&Chapter> {
        match self {
            BookItem::Chapter(chapter) => Some(chapter),
            _ => None,
        }
    }

    /// Returns the chapter payload mutably, if this entry is a chapter
    pub fn as_chapter_mut(&mut self) -> Option<&mut Chapter> {
        match self {
            BookItem::Chapter(chapter) => Some(chapter),
            _ => None,
        }
    }

    /// Returns a display label for the section kind
    pub fn kind(&self) -> &'static str {
        match self {
            BookItem::Chapter(_) => "chapter",
            BookItem::Separator => "separator",
            BookItem::PartTitle(_) => "part title",
        }
    }
}

/// A chapter's payload.
///
/// `content` is the only field this tool rewrites. Everything else the
/// host sends for a chapter (title, numbering, paths, nested items) is
/// captured in `rest` and round-tripped untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Raw markdown body of the chapter
    pub content: String,

    /// Remaining chapter fields from the host
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
