//! Property-based tests using proptest.
//!
//! Inputs are assembled from generated lexemes so the expected token
//! sequence is known up front.

use asmc_lex::{scan, TokenKind};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn ident() -> impl Strategy<Value = (TokenKind, String)> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        "\\$[a-z][a-z0-9]{0,3}",
        "\\.[a-z]{1,8}",
    ]
    .prop_map(|s| (TokenKind::Ident, s))
}

fn int() -> impl Strategy<Value = (TokenKind, String)> {
    prop_oneof![
        "[1-9][0-9]{0,8}",
        "0x[0-9a-fA-F]{1,8}",
        "0X[0-9a-fA-F]{1,8}",
        "0b[01]{1,16}",
        "0[0-7]{0,6}",
        "-[1-9][0-9]{0,4}",
    ]
    .prop_map(|s| (TokenKind::Int, s))
}

fn char_lit() -> impl Strategy<Value = (TokenKind, String)> {
    prop_oneof![
        "'[a-zA-Z0-9 !?\"]'",
        "'\\\\[abfnrtv\\\\']'",
        "'\\\\x[0-9a-fA-F]{2}'",
        "'\\\\[0-3][0-7]{2}'",
    ]
    .prop_map(|s| (TokenKind::Char, s))
}

fn string_lit() -> impl Strategy<Value = (TokenKind, String)> {
    prop_oneof![
        "\"([a-zA-Z0-9 ,.!']|\\\\[nt\"\\\\])*\"",
        "`[^`]{0,24}`",
    ]
    .prop_map(|s| (TokenKind::String, s))
}

fn punct_or_operator() -> impl Strategy<Value = (TokenKind, String)> {
    prop::sample::select(vec![
        (TokenKind::Comma, ","),
        (TokenKind::Colon, ":"),
        (TokenKind::Add, "+"),
        (TokenKind::Sub, "-"),
        (TokenKind::Mul, "*"),
        (TokenKind::Div, "/"),
        (TokenKind::Mod, "%"),
        (TokenKind::And, "&"),
        (TokenKind::Or, "|"),
        (TokenKind::Xor, "^"),
        (TokenKind::Shl, "<<"),
        (TokenKind::Shr, ">>"),
    ])
    .prop_map(|(kind, text)| (kind, text.to_string()))
}

fn lexeme() -> impl Strategy<Value = (TokenKind, String)> {
    prop_oneof![ident(), int(), char_lit(), string_lit(), punct_or_operator()]
}

/// One source line: space-separated lexemes and an optional comment.
fn line() -> impl Strategy<Value = Vec<(TokenKind, String)>> {
    (
        prop::collection::vec(lexeme(), 0..8),
        prop::option::of(";[^\n]{0,24}"),
    )
        .prop_map(|(mut lexemes, comment)| {
            if let Some(comment) = comment {
                lexemes.push((TokenKind::LineComment, comment));
            }
            lexemes.push((TokenKind::Newline, "\n".to_string()));
            lexemes
        })
}

/// A whole program and the tokens it must produce, `Eof` excluded.
fn program() -> impl Strategy<Value = (String, Vec<(TokenKind, String)>)> {
    (prop::collection::vec(line(), 0..12), "[ \t]{1,3}").prop_map(|(lines, sep)| {
        let mut source = String::new();
        let mut expected = Vec::new();
        for line in lines {
            for (i, (kind, text)) in line.into_iter().enumerate() {
                if i > 0 && kind != TokenKind::Newline {
                    source.push_str(&sep);
                }
                source.push_str(&text);
                expected.push((kind, text));
            }
        }
        (source, expected)
    })
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn scan_terminates_with_exactly_one_terminal(input in "\\PC{0,128}") {
        let tokens = scan(&input);
        prop_assert!(!tokens.is_empty());
        prop_assert!(tokens.last().unwrap().is_terminal());
        prop_assert_eq!(tokens.iter().filter(|t| t.is_terminal()).count(), 1);
    }

    #[test]
    fn scan_arbitrary_ascii_never_panics(
        input in prop::collection::vec(prop::char::range('\0', '\x7f'), 0..256)
            .prop_map(|v| v.into_iter().collect::<String>())
    ) {
        let tokens = scan(&input);
        prop_assert!(tokens.last().unwrap().is_terminal());
    }

    #[test]
    fn valid_program_scans_to_expected_tokens((source, expected) in program()) {
        let tokens = scan(&source);
        prop_assert_eq!(tokens.len(), expected.len() + 1);
        for (got, (kind, text)) in tokens.iter().zip(&expected) {
            prop_assert_eq!(got.kind, *kind);
            prop_assert_eq!(got.text(), text.as_str());
        }
        prop_assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn valid_program_round_trips((source, expected) in program()) {
        let joined: String = scan(&source).iter().map(|t| t.text()).collect();
        let lexemes: String = expected.iter().map(|(_, text)| text.as_str()).collect();
        prop_assert_eq!(joined, lexemes);
    }

    #[test]
    fn literal_tokens_rescan_to_themselves((source, _) in program()) {
        for token in scan(&source) {
            if token.kind == TokenKind::Ident || token.kind.is_literal() {
                let again = scan(token.text());
                prop_assert_eq!(again.len(), 2);
                prop_assert_eq!(again[0].kind, token.kind);
                prop_assert_eq!(again[0].text(), token.text());
                prop_assert_eq!(again[1].kind, TokenKind::Eof);
            }
        }
    }

    #[test]
    fn tokens_without_separators_keep_input_order(
        words in prop::collection::vec("[a-z]{1,6}", 1..10)
    ) {
        let source = words.join(",");
        let idents: Vec<String> = scan(&source)
            .into_iter()
            .filter(|t| t.kind == TokenKind::Ident)
            .map(|t| t.text.into_owned())
            .collect();
        prop_assert_eq!(idents, words);
    }
}
