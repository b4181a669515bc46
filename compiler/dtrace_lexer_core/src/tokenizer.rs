//! Hand-written D tokenizer producing `(TokenKind, len)` pairs.
//!
//! The tokenizer reads characters from a [`Cursor`] and produces one
//! [`Token`] per call with zero heap allocation. Each call is a fresh scan
//! that starts undecided, branches on the first character, and ends in one
//! of the eight token kinds. Nothing survives a call boundary except the
//! cursor position.
//!
//! # Malformed Input
//!
//! Nothing is rejected. An unterminated comment or literal, or a backslash
//! at the very end of input, produces a token of its kind that stops at
//! end-of-input. Buffers being edited are incomplete most of the time, and
//! the highlighter must keep working on them.
//!
//! # Lookahead
//!
//! Every scan looks at most one character past the end of the token it
//! returns (the character it pushes back). Incremental relexing relies on
//! this bound.

use crate::cursor::Cursor;
use crate::tables;
use crate::tag::{Token, TokenKind};

/// Stateless D tokenizer over a character cursor.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer reading from `cursor`.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset where the next token starts.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.token_start()
    }

    /// Produce the next token, or `None` once the input is exhausted.
    ///
    /// Subsequent calls after end-of-input keep returning `None`.
    pub fn next_token(&mut self) -> Option<Token> {
        let Some(first) = self.cursor.read() else {
            self.cursor.accept();
            return None;
        };

        let kind = match first {
            '\t' | '\n' | '\r' | ' ' => self.whitespace(),
            '"' | '\'' => self.string(first),
            '.' | ',' | '(' | ')' | ';' | ':' | '-' | '+' | '{' | '}' | '=' | '<' | '>' | '*'
            | '!' | '&' | '|' | '[' | ']' => TokenKind::Separator,
            '/' => self.slash_or_comment(),
            '#' => self.preprocessor(),
            _ => self.identifier(),
        };

        let len = self.cursor.accept();
        debug_assert!(len > 0, "token {kind:?} consumed no input");
        Some(Token { kind, len })
    }

    // ─── Whitespace ─────────────────────────────────────────────────

    fn whitespace(&mut self) -> TokenKind {
        self.cursor.eat_while(is_whitespace);
        TokenKind::Whitespace
    }

    // ─── Comments ───────────────────────────────────────────────────

    fn slash_or_comment(&mut self) -> TokenKind {
        if self.cursor.read() == Some('*') {
            self.block_comment();
            TokenKind::Comment
        } else {
            self.cursor.backup(1);
            TokenKind::Separator
        }
    }

    fn block_comment(&mut self) {
        loop {
            self.cursor.eat_until(b'*');
            if self.cursor.read().is_none() {
                return; // unterminated
            }
            // Just past a '*': only '/' closes. Anything else is re-examined,
            // which handles `**/`.
            if self.cursor.read() == Some('/') {
                return;
            }
            self.cursor.backup(1);
        }
    }

    // ─── Preprocessor ───────────────────────────────────────────────

    fn preprocessor(&mut self) -> TokenKind {
        loop {
            self.cursor.eat_until2(b'\\', b'\n');
            match self.cursor.read() {
                Some('\\') => {
                    // Escaped character, newline included (line continuation).
                    self.cursor.read();
                }
                Some('\n') | None => {
                    // The terminator belongs to the next token.
                    self.cursor.backup(1);
                    return TokenKind::Preprocessor;
                }
                Some(_) => {}
            }
        }
    }

    // ─── String & Char Literals ─────────────────────────────────────

    fn string(&mut self, barrier: char) -> TokenKind {
        loop {
            self.cursor.eat_until3(b'"', b'\'', b'\\');
            match self.cursor.read() {
                None => return TokenKind::String, // unterminated
                Some('\\') => {
                    // Escaped character is content, whatever it is.
                    self.cursor.read();
                }
                Some(c) if c == barrier => return TokenKind::String,
                Some(_) => {} // the other quote is content
            }
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────

    fn identifier(&mut self) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        tables::classify(self.cursor.read_text())
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Returns `true` for the whitespace characters D separates tokens with.
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r' | b' ')
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: tokenize a source string and collect all tokens.
///
/// For streaming access, construct a `SourceBuffer` + `Tokenizer` directly.
pub fn tokenize(source: &str) -> Vec<Token> {
    let buf = crate::SourceBuffer::new(source);
    Tokenizer::new(buf.cursor()).collect()
}

#[cfg(test)]
mod tests;
