use crate::{
    ast::expressions::{Expression, Identifier, InfixExpr, Literal, LiteralValue, PrefixExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    parser.enter_nesting()?;
    let expr = parse_nested_expr(parser, bp);
    parser.exit_nesting();

    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixParseFn { kind: token_kind },
                parser.current_token().span.start,
            ))
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the caller, fold it into lhs
    while parser.peek_token_kind() != TokenKind::Semicolon && bp < parser.peek_precedence() {
        let led = match parser.get_led_lookup().get(&parser.peek_token_kind()) {
            Some(led) => *led,
            None => return Ok(left),
        };

        let operator_bp = parser.peek_precedence();
        parser.advance();

        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    Ok(Expression::Identifier(Identifier {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Expression::Literal(Literal {
            token,
            value: LiteralValue::Int(value),
        })),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParseError {
                token: token.value.clone(),
            },
            token.span.start,
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let value = token.kind == TokenKind::True;

    Ok(Expression::Literal(Literal {
        token,
        value: LiteralValue::Bool(value),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpr {
        operator,
        right: Box::new(right),
    }))
}

/// Parses the right operand at the operator's own binding power, which
/// makes operators of equal precedence group to the left.
pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expr)
}
