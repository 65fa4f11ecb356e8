//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level parsing
//! loop. The parser pulls tokens from its own lexer on demand and keeps two
//! of them buffered: the token being looked at (`current`) and the one after
//! it (`peek`).
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest chain of nested expressions a single statement may contain.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// Syntax errors never abort a parse. They are collected in `errors` and
/// the statement they occurred in is dropped.
pub struct Parser {
    /// Source of tokens, owned exclusively by this parser
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// The token after `current`
    peek: Token,
    /// Diagnostics collected so far, in the order they were found
    errors: Vec<Error>,
    /// Number of `parse_expr` calls currently on the stack
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser over `source` with its lookup tables populated
    /// and both token slots filled.
    pub fn new(source: impl Into<String>) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the token after the current one without advancing.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the peek token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Moves `peek` into `current` and pulls a new `peek` from the lexer.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances only if the peek token is of the expected kind.
    ///
    /// # Returns
    ///
    /// Returns an `UnexpectedToken` error located at the peek token if the
    /// kinds differ; the parser is left where it was.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.span.start,
            ));
        }

        self.advance();
        Ok(())
    }

    /// Binding power of the peek token, `Lowest` if it is not an operator.
    pub fn peek_precedence(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.peek.kind)
            .unwrap_or(&BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Diagnostics recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Enters one more level of expression nesting.
    ///
    /// Fails with `NestingTooDeep` at the current token once the limit is
    /// reached; the depth is left unchanged in that case.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current.span.start,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Skips the rest of a broken statement that began at byte `start`.
    ///
    /// Stops after the statement's `;`, or without consuming anything on the
    /// `let`/`return` that opens the next statement, since `;` is optional.
    fn synchronize(&mut self, start: usize) {
        loop {
            match self.current.kind {
                TokenKind::EndOfInput => return,
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                TokenKind::Let | TokenKind::Return if self.current.span.start != start => return,
                _ => self.advance(),
            }
        }
    }

    /// Parses statements until the end of input.
    ///
    /// A statement that fails to parse records its error and is left out
    /// of the program; parsing resumes with the next statement.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while self.current.kind != TokenKind::EndOfInput {
            let start = self.current.span.start;

            match parse_stmt(self) {
                Ok(stmt) => {
                    program.push(stmt);
                    self.advance();
                }
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize(start);
                }
            }
        }

        program
    }
}

/// Parses `source` into a program.
///
/// This is the main entry point for callers that only need the tree and
/// human-readable diagnostics. A non-empty error list means the program is
/// missing whichever statements failed.
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    let errors = parser
        .errors()
        .iter()
        .map(|error| error.to_string())
        .collect();

    (program, errors)
}
