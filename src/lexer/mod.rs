//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand tokenization with a single character of lookahead
//! - Recognition of keywords, identifiers, integers, and operators
//! - Byte spans on every token for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
