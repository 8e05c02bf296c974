//! The contract between a token supplier and the parser.

use super::tokens::Token;

/// A sequential supplier of tokens.
///
/// Each call hands out the next token and advances; there is no rewind.
/// Once the stream is exhausted every call yields an EOF token, which lets
/// the parser keep its lookahead full at the end of input.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl TokenSource for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Token {
        self.next().unwrap_or_else(Token::eof)
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Box<T> {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}
