//! Spanned tokens for a whole source.

use std::ops::Range;

use dtrace_lexer_core::TokenKind;

use crate::Span;

/// A classified token with its location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexedToken {
    pub kind: TokenKind,
    pub span: Span,
}

impl LexedToken {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        LexedToken { kind, span }
    }
}

/// Tokens of one source, in order.
///
/// # Invariant
///
/// Spans are non-empty and contiguous: the first starts at 0, each starts
/// where the previous ended, and the last ends at `source_len`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<LexedToken>,
    source_len: u32,
}

impl TokenList {
    pub(crate) fn from_parts(tokens: Vec<LexedToken>, source_len: u32) -> Self {
        debug_assert!(
            tokens.windows(2).all(|w| w[0].span.end == w[1].span.start),
            "token spans must be contiguous"
        );
        debug_assert_eq!(
            tokens.last().map_or(0, |t| t.span.end),
            source_len,
            "tokens must cover the whole source"
        );
        TokenList { tokens, source_len }
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Length in bytes of the source these tokens cover.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&LexedToken> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[LexedToken] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexedToken> {
        self.tokens.iter()
    }

    /// Token kinds in order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }

    /// Index of the token containing byte `offset`.
    pub fn index_at(&self, offset: u32) -> Option<usize> {
        let index = self.tokens.partition_point(|t| t.span.end <= offset);
        self.tokens
            .get(index)
            .filter(|t| t.span.contains(offset))
            .map(|_| index)
    }

    /// Index of the token starting exactly at byte `offset`.
    pub fn index_starting_at(&self, offset: u32) -> Option<usize> {
        self.tokens
            .binary_search_by_key(&offset, |t| t.span.start)
            .ok()
    }

    /// Text of token `index`, sliced from the source it was lexed from.
    pub fn text<'s>(&self, source: &'s str, index: usize) -> Option<&'s str> {
        self.tokens
            .get(index)
            .and_then(|t| source.get(t.span.to_range()))
    }

    /// Byte ranges paired with presentation category names.
    ///
    /// This is what a host feeds into its style lookup.
    pub fn highlight_ranges(&self) -> impl Iterator<Item = (Range<usize>, &'static str)> + '_ {
        self.tokens
            .iter()
            .map(|t| (t.span.to_range(), t.kind.category()))
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a LexedToken;
    type IntoIter = std::slice::Iter<'a, LexedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
