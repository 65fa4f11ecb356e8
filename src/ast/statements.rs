use crate::{lexer::tokens::Token, Span};

use super::{
    ast::Node,
    expressions::{Expression, Identifier},
};

/// Statement
///
/// The closed set of top-level statement kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

/// Let Statement
/// Binds `name` to the value of an expression: `let x = 5;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

/// Return Statement
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expression,
}

/// Expression Statement
/// A bare expression used as a statement. `token` is the first token of
/// the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expression,
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => &stmt.token.value,
            Statement::Return(stmt) => &stmt.token.value,
            Statement::Expression(stmt) => &stmt.token.value,
        }
    }

    fn get_span(&self) -> Span {
        match self {
            Statement::Let(stmt) => Span {
                start: stmt.token.span.start,
                end: stmt.value.get_span().end,
            },
            Statement::Return(stmt) => Span {
                start: stmt.token.span.start,
                end: stmt.value.get_span().end,
            },
            Statement::Expression(stmt) => stmt.expression.get_span(),
        }
    }
}
