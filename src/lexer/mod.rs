//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! The parser never sees the lexer directly, only the [`source::TokenSource`]
//! trait, so any pull-based token supplier can drive it.

pub mod lexer;
pub mod source;
pub mod tokens;
