//! Preprocessor protocol types and wire functions
//!
//! The host sends a JSON array of exactly two elements on stdin: the
//! build context and the book. The processed book goes back on stdout;
//! the context does not.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::book::Book;

#[derive(Debug, Error)]
pub enum PreprocessError {
    /// Stdin did not hold a valid `[context, book]` pair
    #[error("malformed input, expected a [context, book] JSON pair: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// The book opens with a section that has no chapter payload
    #[error("expected the first section to be a chapter, found a {0}")]
    FirstSectionNotChapter(&'static str),

    /// The processed book could not be written back to the host
    #[error("failed to write processed book: {0}")]
    WriteOutput(#[source] serde_json::Error),
}

/// Build context supplied by the host.
///
/// The context is opaque by contract: any valid JSON value is accepted,
/// nothing in it is ever inspected, and it never appears in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreprocessorContext(Value);

impl From<Value> for PreprocessorContext {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A book transformation as the host sees it.
///
/// Implementations must be pure: same input pair, same output book, no
/// side effects beyond the host handshake.
pub trait Preprocessor {
    /// Unique name, matching the `[preprocessor.<name>]` table in the
    /// host's configuration
    fn name(&self) -> &str;

    /// Transforms the book. The context is informational only and must
    /// not leak into the returned book.
    fn run(&self, ctx: &PreprocessorContext, book: Book) -> Result<Book, PreprocessError>;

    /// Whether this preprocessor supports the given output renderer.
    ///
    /// Defaults to supporting every renderer. The host reads the answer
    /// from the process exit status, so a `false` here becomes a
    /// non-zero exit with no output.
    fn supports_renderer(&self, _renderer: &str) -> bool {
        true
    }
}

/// Reads the `[context, book]` pair the host sends on stdin.
///
/// The input must be a single JSON array of exactly two elements.
/// Invalid JSON, wrong arity, trailing data, and missing model fields
/// inside the book all surface as [`PreprocessError::MalformedInput`].
pub fn parse_input<R: Read>(input: R) -> Result<(PreprocessorContext, Book), PreprocessError> {
    serde_json::from_reader(input).map_err(PreprocessError::MalformedInput)
}

/// Writes the processed book back to the host.
///
/// The context is never echoed; the book is the entire output.
pub fn write_book<W: Write>(book: &Book, output: W) -> Result<(), PreprocessError> {
    serde_json::to_writer(output, book).map_err(PreprocessError::WriteOutput)
}
