//! Host-facing description of the D language.
//!
//! Editors register a language under a MIME-type-like identifier, list the
//! token kinds it produces, and ask it for a fresh lexer per document. This
//! module is that surface; everything behind it is the tokenizer.

use crate::{Cursor, TokenKind, Tokenizer};

/// Registration identifier hosts bind D sources to.
pub const MIME_TYPE: &str = "text/x-dtrace";

/// File extensions associated with [`MIME_TYPE`].
pub const FILE_EXTENSIONS: &[&str] = &["d"];

/// Create a fresh tokenizer reading from `cursor`.
///
/// The tokenizer keeps no saved state, so hosts restart scanning at any
/// token boundary with a cursor from
/// [`SourceBuffer::cursor_at`](crate::SourceBuffer::cursor_at).
pub fn create_lexer(cursor: Cursor<'_>) -> Tokenizer<'_> {
    Tokenizer::new(cursor)
}

/// Every token kind the lexer produces.
pub fn token_kinds() -> &'static [TokenKind] {
    &TokenKind::ALL
}

/// Returns `true` if `path` has a D source extension.
pub fn is_dtrace_path(path: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && FILE_EXTENSIONS.contains(&ext))
}
