//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation, including two-character operators
//! - End of input behaviour
//! - Illegal characters

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds_and_values(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .map(|token| (token.kind, token.value))
        .collect()
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = kinds_and_values("=+(){},;");

    let expected = vec![
        (TokenKind::Assign, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::LParen, "("),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Comma, ","),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EndOfInput, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value)) in tokens.iter().zip(expected) {
        assert_eq!(token.0, kind);
        assert_eq!(token.1, value);
    }
}

#[test]
fn test_tokenize_let_statement() {
    let tokens = tokenize("let five = 5;");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[0].value, "let");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "five");
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].value, "5");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EndOfInput);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EndOfInput);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("letter iff returned");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "letter");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "iff");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "returned");
}

#[test]
fn test_tokenize_two_char_operators() {
    let tokens = tokenize("10 == 10; 10 != 9;");

    assert_eq!(tokens.len(), 9);
    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[1].kind, TokenKind::Equal);
    assert_eq!(tokens[1].value, "==");
    assert_eq!(tokens[1].span.end - tokens[1].span.start, 2);
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
    assert_eq!(tokens[4].kind, TokenKind::Integer);
    assert_eq!(tokens[5].kind, TokenKind::NotEqual);
    assert_eq!(tokens[5].value, "!=");
    assert_eq!(tokens[6].kind, TokenKind::Integer);
    assert_eq!(tokens[6].value, "9");
    assert_eq!(tokens[7].kind, TokenKind::Semicolon);
    assert_eq!(tokens[8].kind, TokenKind::EndOfInput);
}

#[test]
fn test_single_char_fallbacks() {
    let tokens = tokenize("!-/*5; 5 < 10 > 5; = !");

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Bang,
            TokenKind::Minus,
            TokenKind::Slash,
            TokenKind::Asterisk,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Integer,
            TokenKind::LessThan,
            TokenKind::Integer,
            TokenKind::GreaterThan,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Assign,
            TokenKind::Bang,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EndOfInput);
        assert_eq!(token.value, "");
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_empty_input() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
}

#[test]
fn test_whitespace_only_input() {
    let tokens = tokenize(" \t\r\n  ");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
}

#[test]
fn test_identifier_and_number_at_end_of_input() {
    let tokens = tokenize("foobar 838383");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foobar");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "838383");
    assert_eq!(tokens[2].kind, TokenKind::EndOfInput);
}

#[test]
fn test_long_identifier_is_not_truncated() {
    let name = "a".repeat(200);
    let tokens = tokenize(name.as_str());

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, name);
}

#[test]
fn test_digits_split_identifiers() {
    let tokens = tokenize("abc123");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "123");
}

#[test]
fn test_illegal_characters() {
    let tokens = tokenize("let x = @ é;");

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[4].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].value, "é");
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  ab = 12;");

    assert_eq!((tokens[0].span.start, tokens[0].span.end), (0, 3));
    assert_eq!((tokens[1].span.start, tokens[1].span.end), (5, 7));
    assert_eq!((tokens[2].span.start, tokens[2].span.end), (8, 9));
    assert_eq!((tokens[3].span.start, tokens[3].span.end), (10, 12));
    assert_eq!((tokens[5].span.start, tokens[5].span.end), (13, 13));
}

#[test]
fn test_token_kind_names() {
    assert_eq!(TokenKind::Illegal.name(), "ILLEGAL");
    assert_eq!(TokenKind::EndOfInput.name(), "EOF");
    assert_eq!(TokenKind::Identifier.name(), "IDENT");
    assert_eq!(TokenKind::Integer.name(), "INT");
    assert_eq!(TokenKind::NotEqual.name(), "!=");
    assert_eq!(TokenKind::Comma.name(), ",");
    assert_eq!(TokenKind::Function.name(), "FUNCTION");
    assert_eq!(TokenKind::Return.to_string(), "RETURN");
}

#[test]
fn test_token_kind_literals() {
    assert_eq!(TokenKind::Identifier.literal(), None);
    assert_eq!(TokenKind::Integer.literal(), None);
    assert_eq!(TokenKind::Illegal.literal(), None);
    assert_eq!(TokenKind::EndOfInput.literal(), Some(""));
    assert_eq!(TokenKind::Function.literal(), Some("fn"));
    assert_eq!(TokenKind::Equal.literal(), Some("=="));
}
