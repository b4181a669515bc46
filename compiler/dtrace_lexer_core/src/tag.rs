//! Token kinds and the tokens the scanner produces.
//!
//! [`TokenKind`] is the closed set of classifications a highlighter styles.
//! Each kind carries a stable category name; hosts key their presentation
//! styles by that name, so the strings never change.

use std::fmt;

/// Classification of a scanned token.
///
/// `#[repr(u8)]` keeps the kind one byte wide so [`Token`] stays compact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// Run of spaces, tabs, carriage returns and newlines.
    Whitespace = 0,
    /// `/* ... */` block comment, possibly unterminated.
    Comment = 1,
    /// `"..."` or `'...'` literal, possibly unterminated.
    String = 2,
    /// `#` directive line, including backslash-continued lines.
    Preprocessor = 3,
    /// Single punctuation or operator character.
    Separator = 4,
    /// Reserved word of the D language.
    Keyword = 5,
    /// Identifier-shaped text that is neither a keyword nor a builtin.
    Identifier = 6,
    /// DTrace builtin variable, function, aggregation or type.
    Builtin = 7,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Preprocessor,
        TokenKind::Separator,
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Builtin,
    ];

    /// Presentation category name for this kind.
    pub const fn category(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Preprocessor => "preprocessor",
            TokenKind::Separator => "separator",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Builtin => "builtin",
        }
    }

    /// Look up a kind by its category name.
    pub fn from_category(category: &str) -> Option<TokenKind> {
        Self::ALL.into_iter().find(|kind| kind.category() == category)
    }

    /// Returns `true` for tokens that carry no syntax (whitespace, comments).
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// One scanned token: its kind and the byte length of the text it covers.
///
/// The token's start is the tokenizer position before the call that
/// produced it; the text is not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub len: u32,
}

/// Size assertion: u8 tag + padding + u32 length.
const _: () = assert!(std::mem::size_of::<Token>() == 8);
