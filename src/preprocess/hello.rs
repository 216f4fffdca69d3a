//! The built-in greeting preprocessor

use crate::book::Book;

use super::protocol::{PreprocessError, Preprocessor, PreprocessorContext};

/// Replacement content for the opening chapter
pub const GREETING: &str = "# Hello";

/// Rewrites the opening chapter's content to a fixed greeting.
///
/// Every other section, and every other field of the opening chapter,
/// passes through untouched. A book with no sections is returned as-is;
/// a book opening with a non-chapter section is an error.
pub struct HelloPreprocessor;

impl Preprocessor for HelloPreprocessor {
    fn name(&self) -> &str {
        "hello"
    }

    fn run(&self, _ctx: &PreprocessorContext, mut book: Book) -> Result<Book, PreprocessError> {
        if let Some(first) = book.first_section_mut() {
            match first.as_chapter_mut() {
                Some(chapter) => chapter.content = GREETING.to_string(),
                None => return Err(PreprocessError::FirstSectionNotChapter(first.kind())),
            }
        }

        Ok(book)
    }
}
