//! Incremental relexing after a text edit.
//!
//! The tokenizer keeps no state between tokens and looks at most one
//! character past the token it returns. Two consequences:
//!
//! - Tokens ending before `edit.start - 1` never saw the edit. Rescanning
//!   starts at the token containing `edit.start - 1`, which may have peeked
//!   at the first edited character.
//! - Once a rescanned token starts at or after the end of the inserted text
//!   on a position where an old token also started, the rest of the old
//!   stream is valid. It is reused with its spans shifted by the edit.
//!
//! The result is always identical to lexing the new source from scratch.

use dtrace_lexer_core::{SourceBuffer, Tokenizer};

use crate::{check_source_len, LexError, LexedToken, Span, TokenList};

/// A replacement of `start..old_end` in the old source by `new_len` bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextEdit {
    /// Start of the replaced range (same in old and new source).
    pub start: u32,
    /// End of the replaced range in the old source.
    pub old_end: u32,
    /// Length of the inserted text.
    pub new_len: u32,
}

impl TextEdit {
    pub const fn new(start: u32, old_end: u32, new_len: u32) -> Self {
        TextEdit {
            start,
            old_end,
            new_len,
        }
    }

    /// Insertion of `len` bytes at `at`.
    pub const fn insert(at: u32, len: u32) -> Self {
        Self::new(at, at, len)
    }

    /// Deletion of `start..end`.
    pub const fn delete(start: u32, end: u32) -> Self {
        Self::new(start, end, 0)
    }

    /// Bytes removed from the old source.
    #[inline]
    pub const fn removed_len(&self) -> u32 {
        self.old_end - self.start
    }

    /// End of the inserted text in the new source.
    #[inline]
    pub const fn new_end(&self) -> u32 {
        self.start + self.new_len
    }

    /// Map an old offset at or after `old_end` into the new source.
    #[inline]
    fn old_to_new(&self, offset: u32) -> u32 {
        debug_assert!(offset >= self.old_end);
        offset - self.removed_len() + self.new_len
    }

    /// Map a new offset at or after `new_end()` into the old source.
    #[inline]
    fn new_to_old(&self, offset: u32) -> u32 {
        debug_assert!(offset >= self.new_end());
        offset - self.new_len + self.removed_len()
    }
}

/// Re-tokenize `new_source`, reusing tokens of `old` the edit cannot affect.
///
/// `old` must be the token list of the source before `edit` was applied.
/// Old boundaries the rescan relies on are checked against `new_source`; one
/// that splits a character fails with [`LexError::StaleTokens`]. Other
/// mismatches between `old` and the real old source go undetected.
#[tracing::instrument(level = "debug", skip_all, fields(
    start = edit.start,
    old_end = edit.old_end,
    new_len = edit.new_len,
))]
pub fn relex(old: &TokenList, new_source: &str, edit: TextEdit) -> Result<TokenList, LexError> {
    let old_len = old.source_len();
    if edit.start > edit.old_end || edit.old_end > old_len {
        return Err(LexError::EditOutOfBounds {
            start: edit.start,
            end: edit.old_end,
            source_len: old_len,
        });
    }
    let expected =
        u64::from(old_len) - u64::from(edit.removed_len()) + u64::from(edit.new_len);
    if expected != new_source.len() as u64 {
        return Err(LexError::EditLengthMismatch {
            expected,
            actual: new_source.len(),
        });
    }
    let source_len = check_source_len(new_source)?;

    let restart_index = match edit.start.checked_sub(1) {
        Some(before) => old.index_at(before).unwrap_or(0),
        None => 0,
    };
    let restart = old.get(restart_index).map_or(0, |t| t.span.start);
    let old_tokens = old.as_slice();
    let mut tokens: Vec<LexedToken> = old_tokens[..restart_index].to_vec();

    let buf = SourceBuffer::new(new_source);
    let cursor = buf
        .cursor_at(restart)
        .ok_or(LexError::StaleTokens { offset: restart })?;
    let mut tokenizer = Tokenizer::new(cursor);
    let mut rescanned = 0usize;
    loop {
        let start = tokenizer.pos();
        if start >= edit.new_end() {
            if let Some(index) = old.index_starting_at(edit.new_to_old(start)) {
                let reused = &old_tokens[index..];
                for t in reused {
                    let span = Span::new(edit.old_to_new(t.span.start), edit.old_to_new(t.span.end));
                    if !new_source.is_char_boundary(span.start as usize) {
                        return Err(LexError::StaleTokens { offset: span.start });
                    }
                    tokens.push(LexedToken::new(t.kind, span));
                }
                tracing::trace!(at = start, reused = reused.len(), "resynchronized with old tokens");
                break;
            }
        }
        let Some(tok) = tokenizer.next_token() else {
            break;
        };
        tokens.push(LexedToken::new(tok.kind, Span::new(start, start + tok.len)));
        rescanned += 1;
    }

    tracing::debug!(
        restart,
        rescanned,
        tokens = tokens.len(),
        "relexed D source"
    );
    Ok(TokenList::from_parts(tokens, source_len))
}
