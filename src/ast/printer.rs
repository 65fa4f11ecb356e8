//! Canonical rendering of the tree.
//!
//! Prefix and infix expressions are always wrapped in parentheses, so the
//! rendered text spells out exactly how the parser grouped the operators.

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::{Node, Program},
    expressions::{Expression, Identifier, InfixExpr, Literal, LiteralValue, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt, Statement},
};

/// Renders any node to its canonical source text.
pub fn render<N: Node + ?Sized>(node: &N) -> String {
    node.to_string()
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for statement in self.statements() {
            write!(f, "{}", statement)?;
        }

        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "return {};", self.value)
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.expression)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::Literal(literal) => write!(f, "{}", literal),
            Expression::Prefix(prefix) => write!(f, "{}", prefix),
            Expression::Infix(infix) => write!(f, "{}", infix),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            LiteralValue::Int(value) => write!(f, "{}", value),
            LiteralValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}{})", self.operator.value, self.right)
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({} {} {})", self.left, self.operator.value, self.right)
    }
}
