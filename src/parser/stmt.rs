use crate::{
    ast::{
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt, Statement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one statement starting at the current token.
///
/// On success the current token is the last one belonging to the
/// statement, which is its `;` when one was written.
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    }
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Statement::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Statement::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Statement::Expression(ExpressionStmt { token, expression }))
}
