use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ParseResult,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = IdentifierExpr {
        name: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.next_token();

    // The terminator is consumed whether or not the value parsed
    let value = parse_expr(parser, BindingPower::Lowest);

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(Stmt::Let(LetStmt {
        token,
        name,
        value: value?,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let token = parser.current_token().clone();
    parser.next_token();

    let value = parse_expr(parser, BindingPower::Lowest);

    // Skip ahead to the terminator even if the value failed to parse, so the
    // statement loop always resumes past it.
    while !parser.current_token_is(TokenKind::Semicolon)
        && !parser.current_token_is(TokenKind::EOF)
    {
        parser.next_token();
    }

    Ok(Stmt::Return(ReturnStmt {
        token,
        value: value?,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest);

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(Stmt::Expression(ExpressionStmt {
        token,
        expression: expression?,
    }))
}

/// Parses `{ ... }` starting at the opening brace.
///
/// Stops at the closing brace or at EOF. Statements that fail are recorded
/// and skipped, so a block itself never fails.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    parser.next_token();

    let mut body = Vec::new();
    while !parser.current_token_is(TokenKind::CloseCurly)
        && !parser.current_token_is(TokenKind::EOF)
    {
        if let Some(stmt) = parser.parse_statement_recorded() {
            body.push(stmt);
        }
        parser.next_token();
    }

    BlockStmt { token, body }
}
