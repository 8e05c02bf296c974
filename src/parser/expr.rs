use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrayExpr, BooleanExpr, CallExpr, FunctionExpr, HashExpr, IdentifierExpr, IfExpr,
            IndexExpr, InfixExpr, IntegerExpr, PrefixExpr, StringExpr,
        },
    },
    errors::errors::{Error, ErrorImpl, ParseResult},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Starts on the first token of the expression and finishes on its last.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expr> {
    parser.enter_expr()?;
    let expr = parse_nested_expr(parser, bp);
    parser.leave_expr();

    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixProduction { kind: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While the next token binds tighter than bp, keep folding it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_precedence() {
        let Some(led_fn) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied()
        else {
            return Ok(left);
        };

        let operator_bp = parser.peek_precedence();
        parser.next_token();
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let token = parser.current_token().clone();

    Ok(Expr::Identifier(IdentifierExpr {
        name: token.value.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerExpr { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::MalformedLiteral {
                literal: token.value,
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let token = parser.current_token().clone();

    Ok(Expr::String(StringExpr {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_boolean_expr(parser: &mut Parser) -> ParseResult<Expr> {
    Ok(Expr::Boolean(BooleanExpr {
        value: parser.current_token_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> ParseResult<Expr> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.next_token();

    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.next_token();

    let condition = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::CloseParen)?;
    parser.expect_peek(TokenKind::OpenCurly)?;

    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.next_token();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser);

    Ok(Expr::Function(FunctionExpr {
        token,
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` starting on the opening parenthesis.
fn parse_function_parameters(parser: &mut Parser) -> ParseResult<Vec<IdentifierExpr>> {
    let mut parameters = Vec::new();

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.next_token();
        return Ok(parameters);
    }

    loop {
        let token = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(IdentifierExpr {
            name: token.value.clone(),
            token,
        });

        if !parser.peek_token_is(TokenKind::Comma) {
            break;
        }
        parser.next_token();
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> ParseResult<Expr> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> ParseResult<Expr> {
    let token = parser.current_token().clone();
    parser.next_token();

    let index = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseBracket)?;

    Ok(Expr::Index(IndexExpr {
        token,
        collection: Box::new(left),
        index: Box::new(index),
    }))
}

pub fn parse_array_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let token = parser.current_token().clone();
    let elements = parse_expr_list(parser, TokenKind::CloseBracket)?;

    Ok(Expr::Array(ArrayExpr { token, elements }))
}

pub fn parse_hash_expr(parser: &mut Parser) -> ParseResult<Expr> {
    // { key: value, key: value }
    let token = parser.current_token().clone();
    let mut pairs = Vec::new();

    while !parser.peek_token_is(TokenKind::CloseCurly) {
        parser.next_token();
        let key = parse_expr(parser, BindingPower::Lowest)?;

        parser.expect_peek(TokenKind::Colon)?;
        parser.next_token();

        let value = parse_expr(parser, BindingPower::Lowest)?;
        pairs.push((key, value));

        if !parser.peek_token_is(TokenKind::CloseCurly) {
            parser.expect_peek(TokenKind::Comma)?;
        }
    }

    parser.expect_peek(TokenKind::CloseCurly)?;

    Ok(Expr::Hash(HashExpr { token, pairs }))
}

/// Parses a comma-separated list of expressions up to `end`, starting on the
/// opening delimiter and finishing on `end`.
///
/// Shared by call arguments and array elements.
pub fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> ParseResult<Vec<Expr>> {
    let mut list = Vec::new();

    if parser.peek_token_is(end) {
        parser.next_token();
        return Ok(list);
    }

    parser.next_token();
    list.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.next_token();
        parser.next_token();
        list.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(end)?;

    Ok(list)
}
