//! Integration tests for the parsing pipeline.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and parser, then rendering, traversal and error reporting.

use frontend::{
    ast::{
        ast::{Expr, Stmt},
        visitor::{walk_expr, Visitor},
    },
    errors::errors::ErrorImpl,
    format_error,
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    parser::parser::{parse, parse_source, Parser},
};

fn render(source: &str) -> String {
    let (program, errors) = parse_source(source, Some("test.src".to_string()));
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    program.to_string()
}

#[test]
fn test_parse_simple_program() {
    assert_eq!(render("let x = 5 * (2 + y);"), "let x = (5 * (2 + y));");
}

#[test]
fn test_parse_function_and_call() {
    let source = "let add = fn(a, b) { return a + b; };\nadd(1, 2 * 3);";

    assert_eq!(
        render(source),
        "let add = fn(a, b) { return (a + b); }; add(1, (2 * 3));"
    );
}

#[test]
fn test_parse_control_flow() {
    assert_eq!(
        render("if (x > 1) { x } else { 0 }"),
        "if ((x > 1)) { x; } else { 0; };"
    );
}

#[test]
fn test_parse_collections() {
    assert_eq!(
        render(r#"{"a": [1, 2]}["a"][0]"#),
        r#"(({"a": [1, 2]}["a"])[0]);"#
    );
}

#[test]
fn test_parse_comments() {
    let source = "// setup\nlet x = 1; // one\n// done\nx";

    assert_eq!(render(source), "let x = 1; x;");
}

#[test]
fn test_parse_empty_source() {
    let (program, errors) = parse_source("", None);

    assert!(program.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_parse_pretokenized_stream() {
    let tokens = tokenize("-a * b".to_string(), Some("test.src".to_string()));
    let (program, errors) = parse(tokens.into_iter());

    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "((-a) * b);");
}

#[test]
fn test_parse_hand_built_tokens() {
    let tokens = vec![
        Token::new(TokenKind::Return, "return"),
        Token::new(TokenKind::True, "true"),
        Token::new(TokenKind::NotEquals, "!="),
        Token::new(TokenKind::False, "false"),
        Token::new(TokenKind::Semicolon, ";"),
    ];
    let (program, errors) = parse(tokens.into_iter());

    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "return (true != false);");
}

#[test]
fn test_parse_error_missing_assignment() {
    let source = "let x 5;";
    let (_, errors) = parse_source(source, Some("test.src".to_string()));

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind(),
        &ErrorImpl::ExpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Int,
        }
    );

    let formatted = format_error(&errors[0], source);
    let lines: Vec<&str> = formatted.lines().collect();
    assert_eq!(lines[0], "Error: ExpectedTokenError (expected `=` here)");
    assert_eq!(lines[1], "-> test.src");
    assert_eq!(lines[3], "1 | let x 5;");
    assert_eq!(lines[4], "  | ------^");
}

#[test]
fn test_parse_errors_are_all_reported() {
    let (program, errors) = parse_source("1 + ; 2 * ;", None);

    assert!(program.is_empty());
    assert_eq!(errors.len(), 2);
    for error in &errors {
        assert_eq!(
            error.kind(),
            &ErrorImpl::NoPrefixProduction {
                kind: TokenKind::Semicolon,
            }
        );
    }
}

#[test]
fn test_parse_recovers_after_error() {
    let (program, errors) = parse_source("let x 5; let y = 10;", None);

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "5; let y = 10;");
}

#[test]
fn test_parser_messages() {
    let mut parser = Parser::new(tokenize("(1 + 2".to_string(), None).into_iter());
    parser.parse_program();

    assert_eq!(
        parser.messages(),
        ["expected next token to be `)`, got `EOF`"]
    );
}

#[test]
fn test_canonical_rendering_round_trips() {
    let sources = [
        "a + b * c + d / e - f",
        "let f = fn(x, y) { if (x < y) { return x; } else { return y; } };",
        "!(true == false) != -add(a, b[1])",
        r#"{"k\n": [fn() { }, "q\"uote"], 1: 2}"#,
    ];

    for source in sources {
        let (tree, errors) = parse_source(source, None);
        assert!(errors.is_empty());

        let first = render(source);
        let (reparsed, errors) = parse_source(&first, None);
        assert!(errors.is_empty());

        assert_eq!(reparsed, tree, "tree of {:?} changed after rendering", source);
        assert_eq!(render(&first), first, "rendering of {:?} is not stable", source);
    }
}

#[test]
fn test_reparsed_expression_statements_compare_equal() {
    for source in ["1 + 2 * 3;", "f(1)[0];", "-a == !b;"] {
        let (tree, _) = parse_source(source, None);
        let (reparsed, _) = parse_source(&tree.to_string(), None);

        assert_ne!(
            tree.statements[0].get_token().kind,
            reparsed.statements[0].get_token().kind
        );
        assert_eq!(reparsed, tree, "source: {:?}", source);
    }
}

#[derive(Default)]
struct IntegerCounter {
    count: usize,
    sum: i64,
}

impl<'ast> Visitor<'ast> for IntegerCounter {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        if let Expr::Integer(integer) = expr {
            self.count += 1;
            self.sum += integer.value;
        }
        walk_expr(self, expr);
    }
}

#[test]
fn test_visit_parsed_program() {
    let (program, errors) = parse_source("let a = [1, 2, 3]; a[0] + 4; fn(x) { x * 10 }", None);
    assert!(errors.is_empty());

    let mut counter = IntegerCounter::default();
    counter.visit_program(&program);

    assert_eq!(counter.count, 6);
    assert_eq!(counter.sum, 20);
    assert!(matches!(program.statements[0], Stmt::Let(_)));
}
