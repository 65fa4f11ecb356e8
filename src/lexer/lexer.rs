use lazy_static::lazy_static;
use regex::Regex;

use crate::{Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z]+").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\n\r]+").unwrap();
}

/// A cursor over a source buffer that produces one token per call.
///
/// `position` is the byte offset of `ch`, `read_position` the offset of the
/// character after it. Both only ever move forward, and once the input is
/// exhausted `ch` stays `None` and every call yields `EndOfInput`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: Option<char>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = self.source[self.read_position..].chars().next();
        self.position = self.read_position;

        if let Some(ch) = self.ch {
            self.read_position += ch.len_utf8();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.read_position..].chars().next()
    }

    /// Moves the cursor `n` bytes past the current position.
    fn advance_n(&mut self, n: usize) {
        self.read_position = self.position + n;
        self.read_char();
    }

    fn remainder(&self) -> &str {
        &self.source[self.position..]
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }

    /// Consumes the longest match of `pattern` anchored at the cursor.
    fn scan(&mut self, pattern: &Regex) -> String {
        let matched = pattern
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        self.advance_n(matched.len());
        matched
    }

    pub fn next_token(&mut self) -> Token {
        self.scan(&WHITESPACE_PATTERN);

        let start = self.position;
        let ch = match self.ch {
            Some(ch) => ch,
            None => {
                return MK_TOKEN!(
                    TokenKind::EndOfInput,
                    String::new(),
                    Span { start, end: start }
                )
            }
        };

        let kind = match ch {
            '=' if self.peek_char() == Some('=') => TokenKind::Equal,
            '=' => TokenKind::Assign,
            '!' if self.peek_char() == Some('=') => TokenKind::NotEqual,
            '!' => TokenKind::Bang,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            c if c.is_ascii_alphabetic() => return self.read_identifier(),
            c if c.is_ascii_digit() => return self.read_number(),
            _ => TokenKind::Illegal,
        };

        let value = match kind.literal() {
            Some(literal) => String::from(literal),
            None => ch.to_string(),
        };
        self.advance_n(value.len());

        MK_TOKEN!(
            kind,
            value,
            Span {
                start,
                end: self.position
            }
        )
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        let value = self.scan(&IDENTIFIER_PATTERN);

        let kind = match RESERVED_LOOKUP.get(value.as_str()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        };

        MK_TOKEN!(
            kind,
            value,
            Span {
                start,
                end: self.position
            }
        )
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        let value = self.scan(&INTEGER_PATTERN);

        MK_TOKEN!(
            TokenKind::Integer,
            value,
            Span {
                start,
                end: self.position
            }
        )
    }
}

/// Lexes `source` up to and including the first `EndOfInput` token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
