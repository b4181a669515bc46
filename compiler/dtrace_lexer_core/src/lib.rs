//! Low-level tokenizer for the DTrace D language.
//!
//! Standalone crate with no `dtrace_*` dependencies. Editors and syntax
//! highlighters depend on it directly; the `dtrace_lexer` crate adds spans,
//! token lists and incremental relexing on top.
//!
//! ```text
//! source → SourceBuffer → Cursor → Tokenizer → (TokenKind, len)
//! ```
//!
//! The tokenizer never fails. Unterminated comments and literals become
//! tokens that stop at end of input, because sources being edited are
//! usually incomplete.

mod cursor;
pub mod language;
mod source_buffer;
pub mod tables;
mod tag;
mod tokenizer;

pub use cursor::Cursor;
pub use language::{create_lexer, MIME_TYPE};
pub use source_buffer::SourceBuffer;
pub use tag::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
