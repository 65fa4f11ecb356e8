use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A recoverable diagnostic produced while parsing, or a contract
/// violation raised by one of the AST accessors.
///
/// `position` is the byte offset of the offending token in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: usize) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::OutOfRange { .. } => "OutOfRange",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => match expected {
                TokenKind::Identifier => ErrorTip::Suggestion(String::from(
                    "`let` must be followed by a name, e.g. `let x = 5;`",
                )),
                TokenKind::Assign => ErrorTip::Suggestion(String::from(
                    "a binding needs `=` between its name and its value",
                )),
                TokenKind::RParen => ErrorTip::Suggestion(String::from(
                    "did you forget a closing `)`?",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::NoPrefixParseFn { kind } => match kind {
                TokenKind::Illegal => ErrorTip::Suggestion(String::from(
                    "this character is not part of the language",
                )),
                TokenKind::EndOfInput => ErrorTip::Suggestion(String::from(
                    "the input ended in the middle of an expression",
                )),
                _ => ErrorTip::Suggestion(format!("`{}` cannot start an expression", kind)),
            },
            ErrorImpl::IntegerParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::OutOfRange { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the expression up with `let` bindings",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("No prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("Could not parse {token} as integer")]
    IntegerParseError { token: String },
    #[error("Statement index {index} out of range for program of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("Expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
