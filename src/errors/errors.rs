use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

pub type ParseResult<T> = Result<T, Error>;

/// A syntax error together with where it was found.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { .. } => "ExpectedTokenError",
            ErrorImpl::NoPrefixProduction { .. } => "NoPrefixProductionError",
            ErrorImpl::MalformedLiteral { .. } => "MalformedLiteralError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeepError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("expected `{}` here", expected))
            }
            ErrorImpl::NoPrefixProduction { kind: TokenKind::EOF } => {
                ErrorTip::Suggestion(String::from("input ended in the middle of an expression"))
            }
            ErrorImpl::NoPrefixProduction { kind } => {
                ErrorTip::Suggestion(format!("`{}` cannot start an expression", kind))
            }
            ErrorImpl::MalformedLiteral { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    /// A required delimiter or keyword was not the next token.
    #[error("expected next token to be `{expected}`, got `{found}`")]
    ExpectedToken { expected: TokenKind, found: TokenKind },
    /// The token in expression position has no prefix production.
    #[error("no prefix production for `{kind}`")]
    NoPrefixProduction { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    MalformedLiteral { literal: String },
    /// Expressions nested past the parser's depth limit.
    #[error("expression nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}
