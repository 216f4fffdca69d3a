//! # Preprocessor Protocol
//!
//! Plugin side of the host's content-preprocessing handshake.
//!
//! ## Overview
//!
//! The host spawns the preprocessor as a separate short-lived process
//! and exchanges JSON over stdin/stdout. This keeps preprocessors
//! language-agnostic — any executable honoring the handshake works.
//!
//! ## Protocol
//!
//! ```text
//! Host                            mdbook-hello
//!  │                                  │
//!  ├── Spawn: mdbook-hello supports html
//!  │                                  │  exit 0 = supported, no output
//!  ├── Spawn: mdbook-hello            │
//!  │                                  │
//!  ├── Stdin: [context, book]         │
//!  │                                  │
//!  └── Stdout: processed book         │  exit 0, or non-zero with no output
//! ```
//!
//! Only the book travels back. The context is deserialized as part of
//! validating the input pair and then dropped without being inspected.
//!
//! ## Key Types
//!
//! - [`Preprocessor`] - The transformation interface
//! - [`HelloPreprocessor`] - Built-in greeting rewrite
//! - [`PreprocessorContext`] - Opaque build context
//! - [`PreprocessError`] - Everything that can go wrong in one run

mod hello;
mod protocol;

pub use hello::{HelloPreprocessor, GREETING};
pub use protocol::{parse_input, write_book, PreprocessError, Preprocessor, PreprocessorContext};
