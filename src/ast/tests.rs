//! Unit tests for the AST and its printer.
//!
//! Nodes here are built by hand so the printer is checked independently of
//! the parser.

use crate::{
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{
    ast::{Node, Program},
    expressions::{Expression, Identifier, InfixExpr, Literal, LiteralValue, PrefixExpr},
    printer::render,
    statements::{ExpressionStmt, LetStmt, ReturnStmt, Statement},
};

fn token(kind: TokenKind, value: &str, start: usize) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: Span {
            start,
            end: start + value.len(),
        },
    }
}

fn ident(name: &str, start: usize) -> Identifier {
    Identifier {
        token: token(TokenKind::Identifier, name, start),
        value: name.to_string(),
    }
}

fn int(value: i64, start: usize) -> Expression {
    Expression::Literal(Literal {
        token: token(TokenKind::Integer, &value.to_string(), start),
        value: LiteralValue::Int(value),
    })
}

#[test]
fn test_render_let_statement() {
    // let myVar = anotherVar;
    let mut program = Program::new();
    program.push(Statement::Let(LetStmt {
        token: token(TokenKind::Let, "let", 0),
        name: ident("myVar", 4),
        value: Expression::Identifier(ident("anotherVar", 12)),
    }));

    assert_eq!(render(&program), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
    assert_eq!(program.get_span(), Span { start: 0, end: 22 });
}

#[test]
fn test_render_return_statement() {
    let stmt = Statement::Return(ReturnStmt {
        token: token(TokenKind::Return, "return", 0),
        value: int(5, 7),
    });

    assert_eq!(render(&stmt), "return 5;");
    assert_eq!(stmt.token_literal(), "return");
}

#[test]
fn test_render_nested_expressions() {
    // -a * b
    let negated = Expression::Prefix(PrefixExpr {
        operator: token(TokenKind::Minus, "-", 0),
        right: Box::new(Expression::Identifier(ident("a", 1))),
    });
    let product = Expression::Infix(InfixExpr {
        left: Box::new(negated),
        operator: token(TokenKind::Asterisk, "*", 3),
        right: Box::new(Expression::Identifier(ident("b", 5))),
    });
    let stmt = Statement::Expression(ExpressionStmt {
        token: token(TokenKind::Minus, "-", 0),
        expression: product,
    });

    assert_eq!(render(&stmt), "((-a) * b)");
    assert_eq!(stmt.get_span(), Span { start: 0, end: 6 });
}

#[test]
fn test_render_boolean_literal_uses_scanned_text() {
    let literal = Expression::Literal(Literal {
        token: token(TokenKind::True, "true", 0),
        value: LiteralValue::Bool(true),
    });

    assert_eq!(render(&literal), "true");
    assert_eq!(literal.token_literal(), "true");
}

#[test]
fn test_render_program_concatenates_statements() {
    let mut program = Program::new();
    program.push(Statement::Expression(ExpressionStmt {
        token: token(TokenKind::Identifier, "a", 0),
        expression: Expression::Identifier(ident("a", 0)),
    }));
    program.push(Statement::Return(ReturnStmt {
        token: token(TokenKind::Return, "return", 3),
        value: int(1, 10),
    }));

    assert_eq!(render(&program), "areturn 1;");
}

#[test]
fn test_empty_program() {
    let program = Program::new();

    assert!(program.is_empty());
    assert_eq!(program.len(), 0);
    assert_eq!(program.token_literal(), "");
    assert_eq!(render(&program), "");
}

#[test]
fn test_statement_index_out_of_range() {
    let mut program = Program::new();
    program.push(Statement::Return(ReturnStmt {
        token: token(TokenKind::Return, "return", 0),
        value: int(1, 7),
    }));

    assert!(program.statement(0).is_ok());

    let error = program.statement(1).unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::OutOfRange { index: 1, len: 1 }
    );
}

#[test]
fn test_program_iterates_in_source_order() {
    let mut program = Program::new();
    for (i, name) in ["x", "y", "z"].iter().enumerate() {
        program.push(Statement::Expression(ExpressionStmt {
            token: token(TokenKind::Identifier, name, i * 2),
            expression: Expression::Identifier(ident(name, i * 2)),
        }));
    }

    let literals: Vec<&str> = (&program)
        .into_iter()
        .map(|stmt| stmt.token_literal())
        .collect();
    assert_eq!(literals, vec!["x", "y", "z"]);
}
