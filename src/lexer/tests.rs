//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Illegal input and end-of-input behaviour

use proptest::prelude::*;

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};
use crate::Span;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let return if else true false");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::Return);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::EOF);

    assert_eq!(tokens[2].literal, "return");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar _underscore CamelCase lets");

    for (token, expected) in tokens
        .iter()
        .zip(["foo", "bar", "_underscore", "CamelCase", "lets"])
    {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.literal, expected);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("foo123");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].literal, "123");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 17290022 99999999999999999999");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].literal, "17290022");
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].literal, "99999999999999999999");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - ! * / < > == !=");
    let expected = [
        (TokenKind::Assign, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::Minus, "-"),
        (TokenKind::Bang, "!"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Slash, "/"),
        (TokenKind::LessThan, "<"),
        (TokenKind::GreaterThan, ">"),
        (TokenKind::Equals, "=="),
        (TokenKind::NotEquals, "!="),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, literal)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("(){},;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_two_character_operators_without_spaces() {
    assert_eq!(
        kinds("a==b!=!c=d"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Bang,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;\nlet add = fn(x, y) {\n  x + y;\n};\nif (5 < 10) {\n\treturn true;\n} else {\n\treturn false;\n}\n";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Function,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::If,
            TokenKind::OpenParen,
            TokenKind::Integer,
            TokenKind::LessThan,
            TokenKind::Integer,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Else,
            TokenKind::OpenCurly,
            TokenKind::Return,
            TokenKind::False,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_illegal_characters() {
    let tokens = tokenize("a @ b # 1");

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "");
    assert_eq!(tokens[1].span, Span::new(2, 3));
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].kind, TokenKind::Integer);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_non_ascii_input_terminates() {
    let tokens = tokenize("é");

    // one illegal token per byte
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Illegal, TokenKind::Illegal, TokenKind::EOF]
    );
}

#[test]
fn test_nul_byte_is_not_end_of_input() {
    assert_eq!(
        kinds("a\0b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Illegal,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_empty_and_whitespace_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds(" \t\r\n  "), vec![TokenKind::EOF]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let x == 10;");

    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[1].span, Span::new(4, 5));
    assert_eq!(tokens[2].span, Span::new(6, 8));
    assert_eq!(tokens[3].span, Span::new(9, 11));
    assert_eq!(tokens[4].span, Span::new(11, 12));
    assert_eq!(tokens[5].span, Span::new(12, 12));
}

#[test]
fn test_lexer_iterator_stops_before_eof() {
    let literals: Vec<String> = Lexer::new("let x = 1;").map(|t| t.literal).collect();

    assert_eq!(literals, vec!["let", "x", "=", "1", ";"]);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("foo ;");

    assert_eq!(tokens[0].to_string(), "Identifier (foo)");
    assert_eq!(tokens[1].to_string(), "Semicolon (;)");
    assert_eq!(tokens[2].to_string(), "EOF ()");
}

const KEYWORDS: &[&str] = &["fn", "let", "return", "if", "else", "true", "false"];

proptest! {
    #[test]
    fn lexer_terminates_with_eof(input in "\\PC{0,200}") {
        let tokens = tokenize(&input);

        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));
        prop_assert!(tokens.len() <= input.len() + 1);
        for token in &tokens {
            prop_assert!((token.span.end.0 as usize) <= input.len());
        }
    }

    #[test]
    fn digit_runs_lex_to_one_integer(digits in "[0-9]{1,30}") {
        let tokens = tokenize(&digits);

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
        prop_assert_eq!(&tokens[0].literal, &digits);
    }

    #[test]
    fn letter_runs_are_keywords_or_identifiers(word in "[a-zA-Z_]{1,12}") {
        let tokens = tokenize(&word);

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].literal, &word);
        if KEYWORDS.contains(&word.as_str()) {
            prop_assert_ne!(tokens[0].kind, TokenKind::Identifier);
        } else {
            prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        }
    }
}
