//! Errors reported by the integration layer.
//!
//! Scanning itself cannot fail; these are caller mistakes: a source too
//! large for `u32` spans, an edit that does not describe the new source, or
//! old tokens that were not lexed from the source being edited.

/// Error returned by [`lex`](crate::lex) and [`relex`](crate::relex).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// Source longer than `u32::MAX` bytes.
    #[error("source is {len} bytes; at most {} bytes can be lexed", u32::MAX)]
    SourceTooLarge { len: usize },

    /// Edit range outside the previously lexed source.
    #[error("edit range {start}..{end} is outside the {source_len}-byte source")]
    EditOutOfBounds { start: u32, end: u32, source_len: u32 },

    /// New source length disagrees with the edit.
    #[error("edited source is {actual} bytes, but the edit implies {expected}")]
    EditLengthMismatch { expected: u64, actual: usize },

    /// A boundary taken from the old tokens splits a character of the new
    /// source.
    #[error("old tokens do not match the edited source: offset {offset} is not a character boundary")]
    StaleTokens { offset: u32 },
}
