//! Token construction macros for the lexer pattern table.

/// Builds a `Token` from a kind, its text and the span it covers.
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), lexer.span_for(2));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Handler for punctuation whose text never varies.
///
/// Queues a `$kind` token spelled `$value` at the current offset, then moves
/// past it. The regex match itself is not consulted.
///
/// ```ignore
/// RegexPattern::new("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!="))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let span = lexer.span_for($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
        }
    };
}
