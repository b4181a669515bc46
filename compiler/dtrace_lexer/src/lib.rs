//! Token lists for DTrace D sources.
//!
//! Wraps the standalone `dtrace_lexer_core` tokenizer with byte spans, a
//! whole-source [`lex`] driver and incremental [`relex`] for editors that
//! re-tokenize after every keystroke.
//!
//! ```text
//! source → SourceBuffer → Tokenizer → (TokenKind, len) → TokenList
//! ```

use std::sync::Once;

use dtrace_lexer_core::{SourceBuffer, Tokenizer};

mod error;
mod relex;
mod span;
mod token_list;

pub use dtrace_lexer_core::{TokenKind, MIME_TYPE};
pub use error::LexError;
pub use relex::{relex, TextEdit};
pub use span::Span;
pub use token_list::{LexedToken, TokenList};

/// Tokenize a whole source.
///
/// Fails only for sources longer than `u32::MAX` bytes; malformed D text
/// always lexes.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let source_len = check_source_len(source)?;
    let buf = SourceBuffer::new(source);
    let mut tokenizer = Tokenizer::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let start = tokenizer.pos();
        let Some(tok) = tokenizer.next_token() else {
            break;
        };
        tokens.push(LexedToken::new(tok.kind, Span::new(start, start + tok.len)));
    }
    tracing::debug!(tokens = tokens.len(), "lexed D source");
    Ok(TokenList::from_parts(tokens, source_len))
}

/// Source length as a `u32`, or an error if spans could not address it.
pub(crate) fn check_source_len(source: &str) -> Result<u32, LexError> {
    u32::try_from(source.len()).map_err(|_| LexError::SourceTooLarge { len: source.len() })
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=dtrace_lexer=debug` or `RUST_LOG=dtrace_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            // A host may have installed its own subscriber already.
            if let Err(err) = installed {
                tracing::debug!(%err, "keeping existing tracing subscriber");
            }
        }
    });
}
