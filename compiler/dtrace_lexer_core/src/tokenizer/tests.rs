#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;
use TokenKind::{
    Builtin, Comment, Identifier, Keyword, Preprocessor, Separator, String, Whitespace,
};

/// Helper: scan a source string into `(kind, text)` pairs.
fn scan(source: &str) -> Vec<(TokenKind, &str)> {
    let buf = SourceBuffer::new(source);
    let mut tokenizer = Tokenizer::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let start = tokenizer.pos() as usize;
        let Some(tok) = tokenizer.next_token() else {
            break;
        };
        let end = start + tok.len as usize;
        tokens.push((tok.kind, &source[start..end]));
    }
    tokens
}

/// Helper: scan and return kinds only.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|t| t.kind).collect()
}

// ─── Coverage ──────────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "int x;",
        "syscall::read:entry /pid == $target/ { @[execname] = count(); }",
        "/* unterminated",
        "\"unterminated",
        "#pragma D option quiet\n",
        "a/b",
        "\t\r\n  ",
        "\u{3bb} \u{1F600}",
    ];
    for source in sources {
        let total: u32 = tokenize(source).iter().map(|t| t.len).sum();
        assert_eq!(
            total as usize,
            source.len(),
            "total token length mismatch for {source:?}"
        );
    }
}

#[test]
fn tokens_reconstruct_source() {
    let source = "#!/usr/sbin/dtrace -s\nprofile-997 /arg0/ { @[stack()] = count(); }\n";
    let joined: std::string::String = scan(source).into_iter().map(|(_, text)| text).collect();
    assert_eq!(joined, source);
}

#[test]
fn every_token_has_positive_length() {
    for source in ["int x;", "/**/", "''", "#", "\\", "@"] {
        for tok in tokenize(source) {
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
        }
    }
}

#[test]
fn empty_source_is_immediately_exhausted() {
    assert!(tokenize("").is_empty());
}

#[test]
fn repeated_calls_after_eof_return_none() {
    let buf = SourceBuffer::new("x");
    let mut tokenizer = Tokenizer::new(buf.cursor());
    assert!(tokenizer.next_token().is_some());
    for _ in 0..5 {
        assert_eq!(tokenizer.next_token(), None);
        assert_eq!(tokenizer.pos(), 1);
    }
}

#[test]
fn deterministic() {
    let source = "BEGIN { self->ts = timestamp; } /* done */";
    assert_eq!(tokenize(source), tokenize(source));
}

#[test]
fn all_ascii_bytes_produce_one_token() {
    for byte in 0u8..=127 {
        let source = std::string::String::from(char::from(byte));
        let tokens = tokenize(&source);
        assert_eq!(tokens.len(), 1, "byte {byte} produced {tokens:?}");
        assert_eq!(tokens[0].len, 1);
    }
}

// ─── Reference examples ────────────────────────────────────────

#[test]
fn keyword_declaration() {
    assert_eq!(
        scan("int x;"),
        vec![
            (Keyword, "int"),
            (Whitespace, " "),
            (Identifier, "x"),
            (Separator, ";"),
        ]
    );
}

#[test]
fn builtin_call() {
    assert_eq!(
        scan("trace(arg0);"),
        vec![
            (Builtin, "trace"),
            (Separator, "("),
            (Builtin, "arg0"),
            (Separator, ")"),
            (Separator, ";"),
        ]
    );
}

#[test]
fn comment_then_identifier() {
    assert_eq!(scan("/* a */b"), vec![(Comment, "/* a */"), (Identifier, "b")]);
}

#[test]
fn comment_with_lone_slash_is_unterminated() {
    assert_eq!(scan("/*/"), vec![(Comment, "/*/")]);
}

#[test]
fn division_is_not_a_comment() {
    assert_eq!(
        scan("a/b"),
        vec![(Identifier, "a"), (Separator, "/"), (Identifier, "b")]
    );
}

#[test]
fn string_with_embedded_apostrophe() {
    assert_eq!(scan("\"it's\""), vec![(String, "\"it's\"")]);
}

#[test]
fn preprocessor_line_continuation() {
    assert_eq!(
        scan("#define X \\\n1"),
        vec![(Preprocessor, "#define X \\\n1")]
    );
}

// ─── Whitespace ────────────────────────────────────────────────

#[test]
fn whitespace_run_is_one_token() {
    assert_eq!(scan(" \t\r\n \n"), vec![(Whitespace, " \t\r\n \n")]);
}

#[test]
fn whitespace_between_tokens() {
    assert_eq!(
        scan("a \n b"),
        vec![(Identifier, "a"), (Whitespace, " \n "), (Identifier, "b")]
    );
}

#[test]
fn form_feed_and_vertical_tab_are_not_whitespace() {
    assert_eq!(scan_kinds("\x0c"), vec![Identifier]);
    assert_eq!(scan_kinds("\x0b"), vec![Identifier]);
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn empty_comment() {
    assert_eq!(scan("/**/"), vec![(Comment, "/**/")]);
}

#[test]
fn comment_ending_in_double_star() {
    assert_eq!(scan("/* x **/y"), vec![(Comment, "/* x **/"), (Identifier, "y")]);
}

#[test]
fn star_slash_star_inside_comment() {
    assert_eq!(scan("/* */*"), vec![(Comment, "/* */"), (Separator, "*")]);
}

#[test]
fn comment_is_not_nested() {
    assert_eq!(
        scan("/* /* */ x */"),
        vec![
            (Comment, "/* /* */"),
            (Whitespace, " "),
            (Identifier, "x"),
            (Whitespace, " "),
            (Separator, "*"),
            (Separator, "/"),
        ]
    );
}

#[test]
fn comment_spans_lines() {
    assert_eq!(scan("/* a\n b\n*/"), vec![(Comment, "/* a\n b\n*/")]);
}

#[test]
fn unterminated_comment_runs_to_eof() {
    assert_eq!(scan("/* open"), vec![(Comment, "/* open")]);
    assert_eq!(scan("/*"), vec![(Comment, "/*")]);
    assert_eq!(scan("/* trailing *"), vec![(Comment, "/* trailing *")]);
}

#[test]
fn comment_with_multibyte_content() {
    assert_eq!(scan("/* \u{3bb}* */x"), vec![(Comment, "/* \u{3bb}* */"), (Identifier, "x")]);
}

#[test]
fn line_comment_syntax_is_two_separators() {
    assert_eq!(
        scan("//x"),
        vec![(Separator, "/"), (Separator, "/"), (Identifier, "x")]
    );
}

// ─── Slash ─────────────────────────────────────────────────────

#[test]
fn slash_at_eof() {
    assert_eq!(scan("/"), vec![(Separator, "/")]);
}

#[test]
fn slash_before_multibyte() {
    assert_eq!(scan("/\u{3bb}"), vec![(Separator, "/"), (Identifier, "\u{3bb}")]);
}

#[test]
fn predicate_slashes() {
    assert_eq!(
        scan("/pid/"),
        vec![(Separator, "/"), (Builtin, "pid"), (Separator, "/")]
    );
}

// ─── Separators ────────────────────────────────────────────────

#[test]
fn every_separator_is_single_character() {
    for c in ".,();:-+{}=<>*!&|[]".chars() {
        let source = c.to_string();
        assert_eq!(scan(&source), vec![(Separator, source.as_str())], "{c:?}");
    }
}

#[test]
fn compound_operators_split() {
    assert_eq!(
        scan("->=="),
        vec![
            (Separator, "-"),
            (Separator, ">"),
            (Separator, "="),
            (Separator, "="),
        ]
    );
}

#[test]
fn other_punctuation_is_identifier_shaped() {
    for c in ['@', '$', '%', '^', '~', '?', '`', '\\'] {
        assert_eq!(scan_kinds(&c.to_string()), vec![Identifier], "{c:?}");
    }
}

// ─── Preprocessor ──────────────────────────────────────────────

#[test]
fn preprocessor_stops_before_newline() {
    assert_eq!(
        scan("#pragma D option quiet\nBEGIN"),
        vec![
            (Preprocessor, "#pragma D option quiet"),
            (Whitespace, "\n"),
            (Identifier, "BEGIN"),
        ]
    );
}

#[test]
fn preprocessor_at_eof() {
    assert_eq!(scan("#include <x.h>"), vec![(Preprocessor, "#include <x.h>")]);
    assert_eq!(scan("#"), vec![(Preprocessor, "#")]);
}

#[test]
fn preprocessor_backslash_at_eof() {
    assert_eq!(scan("#define A \\"), vec![(Preprocessor, "#define A \\")]);
}

#[test]
fn preprocessor_escaped_backslash_then_newline() {
    assert_eq!(
        scan("#a \\\\\nb"),
        vec![(Preprocessor, "#a \\\\"), (Whitespace, "\n"), (Identifier, "b")]
    );
}

#[test]
fn preprocessor_keeps_carriage_return() {
    assert_eq!(
        scan("#x\r\ny"),
        vec![(Preprocessor, "#x\r"), (Whitespace, "\n"), (Identifier, "y")]
    );
}

#[test]
fn preprocessor_multiple_continuations() {
    let source = "#define M(a) \\\n  a + \\\n  1\nx";
    assert_eq!(
        scan(source),
        vec![
            (Preprocessor, "#define M(a) \\\n  a + \\\n  1"),
            (Whitespace, "\n"),
            (Identifier, "x"),
        ]
    );
}

#[test]
fn shebang_line_is_preprocessor() {
    assert_eq!(
        scan("#!/usr/sbin/dtrace -s\n"),
        vec![(Preprocessor, "#!/usr/sbin/dtrace -s"), (Whitespace, "\n")]
    );
}

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn simple_strings() {
    assert_eq!(scan("\"hello\""), vec![(String, "\"hello\"")]);
    assert_eq!(scan("'c'"), vec![(String, "'c'")]);
    assert_eq!(scan("\"\""), vec![(String, "\"\"")]);
}

#[test]
fn char_literal_with_embedded_double_quote() {
    assert_eq!(scan("'\"'"), vec![(String, "'\"'")]);
}

#[test]
fn escaped_quote_does_not_close() {
    assert_eq!(scan(r#""a\"b" x"#)[0], (String, r#""a\"b""#));
}

#[test]
fn escaped_backslash_then_close() {
    assert_eq!(scan(r#""a\\"b"#), vec![(String, r#""a\\""#), (Identifier, "b")]);
}

#[test]
fn string_spans_newlines() {
    assert_eq!(scan("\"a\nb\""), vec![(String, "\"a\nb\"")]);
}

#[test]
fn unterminated_string_runs_to_eof() {
    assert_eq!(scan("\"open"), vec![(String, "\"open")]);
    assert_eq!(scan("'"), vec![(String, "'")]);
}

#[test]
fn backslash_at_eof_inside_string() {
    assert_eq!(scan("\"abc\\"), vec![(String, "\"abc\\")]);
}

#[test]
fn string_with_multibyte_content() {
    assert_eq!(
        scan("\"\u{3bb}\u{1F600}\";"),
        vec![(String, "\"\u{3bb}\u{1F600}\""), (Separator, ";")]
    );
}

#[test]
fn printf_format_string() {
    assert_eq!(
        scan(r#"printf("%s\n", execname);"#),
        vec![
            (Builtin, "printf"),
            (Separator, "("),
            (String, r#""%s\n""#),
            (Separator, ","),
            (Whitespace, " "),
            (Builtin, "execname"),
            (Separator, ")"),
            (Separator, ";"),
        ]
    );
}

// ─── Identifiers ───────────────────────────────────────────────

#[test]
fn identifier_classification() {
    assert_eq!(
        scan("self this probefunc foo_bar1"),
        vec![
            (Keyword, "self"),
            (Whitespace, " "),
            (Keyword, "this"),
            (Whitespace, " "),
            (Builtin, "probefunc"),
            (Whitespace, " "),
            (Identifier, "foo_bar1"),
        ]
    );
}

#[test]
fn numbers_are_identifier_shaped() {
    assert_eq!(scan("0x1F 42"), vec![(Identifier, "0x1F"), (Whitespace, " "), (Identifier, "42")]);
}

#[test]
fn float_splits_at_dot() {
    assert_eq!(
        scan("1.5"),
        vec![(Identifier, "1"), (Separator, "."), (Identifier, "5")]
    );
}

#[test]
fn punctuation_start_absorbs_identifier_run() {
    assert_eq!(scan("$target"), vec![(Identifier, "$target")]);
    assert_eq!(scan("@counts"), vec![(Identifier, "@counts")]);
    assert_eq!(scan("`kmem"), vec![(Identifier, "`kmem")]);
}

#[test]
fn aggregation_key_is_not_builtin() {
    // `@count` starts with '@', so the run is not the bare builtin name.
    assert_eq!(scan_kinds("@count"), vec![Identifier]);
    assert_eq!(scan_kinds("count"), vec![Builtin]);
}

#[test]
fn identifier_stops_at_non_ascii() {
    assert_eq!(
        scan("ab\u{3bb}cd"),
        vec![(Identifier, "ab"), (Identifier, "\u{3bb}cd")]
    );
}

#[test]
fn interior_null_is_identifier() {
    assert_eq!(scan("a\0b"), vec![(Identifier, "a"), (Identifier, "\0b")]);
}

#[test]
fn keyword_prefix_is_identifier() {
    assert_eq!(scan_kinds("integer"), vec![Identifier]);
    assert_eq!(scan_kinds("int"), vec![Keyword]);
}

// ─── Whole programs ────────────────────────────────────────────

#[test]
fn probe_clause() {
    let source = "syscall::open:entry\n/execname == \"ls\"/\n{\n\tprintf(\"%s\", copyinstr(arg0));\n}";
    let kinds: Vec<TokenKind> = scan(source)
        .into_iter()
        .filter(|(kind, _)| *kind != Whitespace)
        .map(|(kind, _)| kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            Identifier, // syscall
            Separator,  // :
            Separator,  // :
            Identifier, // open
            Separator,  // :
            Identifier, // entry
            Separator,  // /
            Builtin,    // execname
            Separator,  // =
            Separator,  // =
            String,     // "ls"
            Separator,  // /
            Separator,  // {
            Builtin,    // printf
            Separator,  // (
            String,     // "%s"
            Separator,  // ,
            Builtin,    // copyinstr
            Separator,  // (
            Builtin,    // arg0
            Separator,  // )
            Separator,  // )
            Separator,  // ;
            Separator,  // }
        ]
    );
}

#[test]
fn iterator_matches_next_token() {
    let source = "BEGIN { exit(0); }";
    let buf = SourceBuffer::new(source);
    let from_iter: Vec<Token> = Tokenizer::new(buf.cursor()).collect();
    assert_eq!(from_iter, tokenize(source));
}

#[test]
fn restart_at_token_boundary() {
    let source = "int x; trace(x);";
    let full = scan(source);
    let buf = SourceBuffer::new(source);
    // "int x; " is 7 bytes and ends on a token boundary.
    let restarted: Vec<TokenKind> = Tokenizer::new(buf.cursor_at(7).unwrap()).map(|t| t.kind).collect();
    let expected: Vec<TokenKind> = full[5..].iter().map(|(kind, _)| *kind).collect();
    assert_eq!(restarted, expected);
}

// ─── Properties ────────────────────────────────────────────────

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_coverage {
    use super::{scan, tokenize};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokens_partition_any_input(source in "\\PC{0,64}") {
            let joined: std::string::String = scan(&source).into_iter().map(|(_, text)| text).collect();
            prop_assert_eq!(joined, source);
        }

        #[test]
        fn tokens_partition_d_like_input(source in "[a-z0-9_ \t\n/*#\"'\\\\(){};:=@$.]{0,64}") {
            let tokens = tokenize(&source);
            let total: u32 = tokens.iter().map(|t| t.len).sum();
            prop_assert_eq!(total as usize, source.len());
            prop_assert!(tokens.iter().all(|t| t.len > 0));
            prop_assert_eq!(tokenize(&source), tokens);
        }
    }
}
