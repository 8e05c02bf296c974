//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level entry
//! points. The parser pulls tokens from a [`TokenSource`] and keeps exactly
//! two of them buffered: the current token and one token of lookahead.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//!
//! Syntax errors never stop the parse. A failing production returns its
//! error to the nearest statement loop, which records it and moves on to
//! the next statement.

use std::{collections::HashMap, mem};

use tracing::debug;

use crate::{
    ast::ast::{Program, Stmt},
    errors::errors::{Error, ErrorImpl, ParseResult},
    lexer::{
        lexer::Lexer,
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        binding_power, create_token_lookups, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// A parser is single-use: build it over a token source, call
/// [`Parser::parse_program`] once, then read [`Parser::errors`].
pub struct Parser {
    /// Where tokens come from
    source: Box<dyn TokenSource>,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Every syntax error recorded so far, in order
    errors: Vec<Error>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// How many `parse_expr` calls are currently open
    depth: usize,
}

/// Deepest expression nesting accepted before the parser gives up on it.
pub const MAX_NESTING_DEPTH: usize = 128;

impl Parser {
    /// Creates a new Parser over `source`.
    ///
    /// Both lookahead slots are filled and every production is registered
    /// before this returns.
    pub fn new(source: impl TokenSource + 'static) -> Self {
        let mut source: Box<dyn TokenSource> = Box::new(source);
        let current = source.next_token();
        let peek = source.next_token();

        let mut parser = Parser {
            source,
            current,
            peek,
            errors: vec![],
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the lookahead by one token.
    pub fn next_token(&mut self) {
        let next = self.source.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    /// Advances onto the next token if it is of the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or an `ExpectedToken` error pointing at the
    /// token that was found instead. The parser does not move on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> ParseResult<Token> {
        if !self.peek_token_is(expected_kind) {
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.get_peek_position(),
            ));
        }

        self.next_token();
        Ok(self.current.clone())
    }

    pub fn peek_precedence(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Opens one level of expression nesting.
    ///
    /// Fails without opening it once [`MAX_NESTING_DEPTH`] levels are open.
    /// Every successful call must be paired with [`Parser::leave_expr`].
    pub fn enter_expr(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_expr(&mut self) {
        self.depth -= 1;
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    pub fn get_peek_position(&self) -> Position {
        self.peek.span.start.clone()
    }

    /// Adds an error to the diagnostics list.
    pub fn record(&mut self, error: Error) {
        debug!(
            error = %error,
            offset = error.get_position().0,
            "recorded syntax error"
        );
        self.errors.push(error);
    }

    /// Every syntax error recorded so far, in the order found.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// The recorded errors as human-readable messages.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Parses one statement, recording its error if it fails.
    pub fn parse_statement_recorded(&mut self) -> Option<Stmt> {
        match parse_stmt(self) {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                self.record(error);
                None
            }
        }
    }

    /// Parses statements until EOF.
    ///
    /// Always returns a program; a statement that failed to parse is left out
    /// and its error is available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = self.parse_statement_recorded() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        program
    }

    /// Consumes the parser, returning the recorded errors.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

/// Parses a token stream into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// parses all statements until EOF and hands back the tree together with
/// every syntax error found. A non-empty error list means the tree is only
/// fit for error reporting, not for evaluation.
pub fn parse(source: impl TokenSource + 'static) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    (program, parser.into_errors())
}

/// Lexes and parses source text in one go.
pub fn parse_source(source: &str, file: Option<String>) -> (Program, Vec<Error>) {
    parse(Lexer::new(source.to_string(), file))
}
