use crate::{lexer::tokens::Token, Span};

use super::ast::Node;

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

// LITERALS

/// Identifier
/// A name, either bound by `let` or referenced inside an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

/// Literal Expression
///
/// `token.value` is the text as scanned; `value` is what it means. The two
/// are never stored in the same field.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub token: Token,
    pub value: LiteralValue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Bool(bool),
}

// COMPLEX

/// Prefix Expression
/// A unary operator applied to its operand: `-a`, `!ok`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right: Box<Expression>,
}

/// Infix Expression
/// A binary operator between two operands: `a + b`, `5 > 4`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expression>,
    pub operator: Token,
    pub right: Box<Expression>,
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => &ident.token.value,
            Expression::Literal(literal) => &literal.token.value,
            Expression::Prefix(prefix) => &prefix.operator.value,
            Expression::Infix(infix) => &infix.operator.value,
        }
    }

    fn get_span(&self) -> Span {
        match self {
            Expression::Identifier(ident) => ident.token.span,
            Expression::Literal(literal) => literal.token.span,
            Expression::Prefix(prefix) => Span {
                start: prefix.operator.span.start,
                end: prefix.right.get_span().end,
            },
            Expression::Infix(infix) => Span {
                start: infix.left.get_span().start,
                end: infix.right.get_span().end,
            },
        }
    }
}
