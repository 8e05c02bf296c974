use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expr, errors::errors::ParseResult, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// How tightly an operator binds its operands, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

lazy_static! {
    /// Binding power of each token that can continue an expression.
    /// Anything missing here binds at `Lowest`.
    pub static ref PRECEDENCES: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equals, BindingPower::Equals);
        map.insert(TokenKind::NotEquals, BindingPower::Equals);
        map.insert(TokenKind::Less, BindingPower::LessGreater);
        map.insert(TokenKind::Greater, BindingPower::LessGreater);
        map.insert(TokenKind::Plus, BindingPower::Sum);
        map.insert(TokenKind::Minus, BindingPower::Sum);
        map.insert(TokenKind::Slash, BindingPower::Product);
        map.insert(TokenKind::Star, BindingPower::Product);
        map.insert(TokenKind::OpenParen, BindingPower::Call);
        map.insert(TokenKind::OpenBracket, BindingPower::Index);
        map
    };
}

pub fn binding_power(kind: TokenKind) -> BindingPower {
    PRECEDENCES
        .get(&kind)
        .copied()
        .unwrap_or(BindingPower::Lowest)
}

pub type NUDHandler = fn(&mut Parser) -> ParseResult<Expr>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> ParseResult<Expr>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and comparison
    parser.led(TokenKind::Equals, parse_infix_expr);
    parser.led(TokenKind::NotEquals, parse_infix_expr);
    parser.led(TokenKind::Less, parse_infix_expr);
    parser.led(TokenKind::Greater, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, parse_infix_expr);
    parser.led(TokenKind::Minus, parse_infix_expr);
    parser.led(TokenKind::Slash, parse_infix_expr);
    parser.led(TokenKind::Star, parse_infix_expr);

    // Call and index
    parser.led(TokenKind::OpenParen, parse_call_expr);
    parser.led(TokenKind::OpenBracket, parse_index_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Int, parse_integer_expr);
    parser.nud(TokenKind::String, parse_string_expr);
    parser.nud(TokenKind::True, parse_boolean_expr);
    parser.nud(TokenKind::False, parse_boolean_expr);

    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::If, parse_if_expr);
    parser.nud(TokenKind::Fn, parse_function_expr);
    parser.nud(TokenKind::OpenBracket, parse_array_expr);
    parser.nud(TokenKind::OpenCurly, parse_hash_expr);
}

// Lookup tables inside parser struct, so every parser owns its own
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
