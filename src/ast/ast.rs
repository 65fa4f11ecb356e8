use std::fmt::{Debug, Display};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::statements::Statement;

/// Node Trait
///
/// Behaviour shared by every node of the tree. `Display` renders the node
/// back to canonical source text.
pub trait Node: Debug + Display {
    /// Returns the literal text of the token the node was built from.
    fn token_literal(&self) -> &str;
    /// Returns the span of source text the node covers.
    fn get_span(&self) -> Span;
}

/// Program
///
/// The root of a parsed source unit. Statements are kept in source order;
/// a statement that failed to parse is simply absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program { statements: vec![] }
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Returns the statement at `index`.
    ///
    /// Asking for a position past the end is a caller bug and is reported
    /// as `OutOfRange` rather than a missing value.
    pub fn statement(&self, index: usize) -> Result<&Statement, Error> {
        self.statements.get(index).ok_or_else(|| {
            Error::new(
                ErrorImpl::OutOfRange {
                    index,
                    len: self.statements.len(),
                },
                self.get_span().end,
            )
        })
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }

    fn get_span(&self) -> Span {
        match (self.statements.first(), self.statements.last()) {
            (Some(first), Some(last)) => Span {
                start: first.get_span().start,
                end: last.get_span().end,
            },
            _ => Span::default(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
