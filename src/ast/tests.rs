//! Unit tests for the AST module.
//!
//! Nodes are built by hand here so rendering can be checked without the
//! parser in the loop.

use std::rc::Rc;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    ast::{Expr, Program, Stmt},
    expressions::{
        ArrayExpr, BooleanExpr, CallExpr, FunctionExpr, HashExpr, IdentifierExpr, IfExpr,
        IndexExpr, InfixExpr, IntegerExpr, PrefixExpr, StringExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    visitor::{walk_expr, Visitor},
};

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        token: Token::new(TokenKind::Identifier, name),
        name: name.to_string(),
    }
}

fn int(value: i64) -> Expr {
    Expr::Integer(IntegerExpr {
        token: Token::new(TokenKind::Int, value.to_string()),
        value,
    })
}

fn infix(left: Expr, operator: &str, right: Expr) -> Expr {
    Expr::Infix(InfixExpr {
        token: Token::new(TokenKind::Plus, operator),
        operator: operator.to_string(),
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn block(body: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        token: Token::new(TokenKind::OpenCurly, "{"),
        body,
    }
}

fn expr_stmt(expression: Expr) -> Stmt {
    Stmt::Expression(ExpressionStmt {
        token: expression.get_token().clone(),
        expression,
    })
}

#[test]
fn test_let_statement_display() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: Token::new(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_statement_rendering() {
    let program = Program {
        statements: vec![
            Stmt::Return(ReturnStmt {
                token: Token::new(TokenKind::Return, "return"),
                value: infix(int(1), "+", int(2)),
            }),
            expr_stmt(Expr::Prefix(PrefixExpr {
                token: Token::new(TokenKind::Bang, "!"),
                operator: "!".to_string(),
                right: Box::new(Expr::Boolean(BooleanExpr {
                    token: Token::new(TokenKind::True, "true"),
                    value: true,
                })),
            })),
            Stmt::Block(block(vec![expr_stmt(int(7))])),
            Stmt::Block(block(vec![])),
        ],
    };

    assert_eq!(program.to_string(), "return (1 + 2); (!true); { 7; } { }");
}

#[test]
fn test_empty_program_renders_nothing() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_string_rendering_escapes() {
    let expr = Expr::String(StringExpr {
        token: Token::new(TokenKind::String, "a\"b"),
        value: "say \"hi\"\n\tback\\slash".to_string(),
    });

    assert_eq!(expr.to_string(), r#""say \"hi\"\n\tback\\slash""#);
}

#[test]
fn test_if_and_function_rendering() {
    let if_expr = Expr::If(IfExpr {
        token: Token::new(TokenKind::If, "if"),
        condition: Box::new(infix(Expr::Identifier(ident("x")), "<", int(1))),
        consequence: block(vec![expr_stmt(Expr::Identifier(ident("x")))]),
        alternative: Some(block(vec![expr_stmt(Expr::Identifier(ident("y")))])),
    });
    assert_eq!(if_expr.to_string(), "if ((x < 1)) { x; } else { y; }");

    let function = Expr::Function(FunctionExpr {
        token: Token::new(TokenKind::Fn, "fn"),
        parameters: vec![ident("a"), ident("b")],
        body: block(vec![expr_stmt(infix(
            Expr::Identifier(ident("a")),
            "*",
            Expr::Identifier(ident("b")),
        ))]),
    });
    assert_eq!(function.to_string(), "fn(a, b) { (a * b); }");

    let no_params = Expr::Function(FunctionExpr {
        token: Token::new(TokenKind::Fn, "fn"),
        parameters: vec![],
        body: block(vec![]),
    });
    assert_eq!(no_params.to_string(), "fn() { }");
}

#[test]
fn test_collection_rendering() {
    let array = Expr::Array(ArrayExpr {
        token: Token::new(TokenKind::OpenBracket, "["),
        elements: vec![int(1), infix(int(2), "*", int(3))],
    });
    assert_eq!(array.to_string(), "[1, (2 * 3)]");

    let index = Expr::Index(IndexExpr {
        token: Token::new(TokenKind::OpenBracket, "["),
        collection: Box::new(array),
        index: Box::new(int(0)),
    });
    assert_eq!(index.to_string(), "([1, (2 * 3)][0])");

    let call = Expr::Call(CallExpr {
        token: Token::new(TokenKind::OpenParen, "("),
        callee: Box::new(Expr::Identifier(ident("add"))),
        arguments: vec![int(1), Expr::Identifier(ident("x"))],
    });
    assert_eq!(call.to_string(), "add(1, x)");
}

#[test]
fn test_hash_rendering_keeps_source_order() {
    let string = |value: &str| {
        Expr::String(StringExpr {
            token: Token::new(TokenKind::String, value),
            value: value.to_string(),
        })
    };

    let hash = Expr::Hash(HashExpr {
        token: Token::new(TokenKind::OpenCurly, "{"),
        pairs: vec![
            (string("zeta"), int(1)),
            (string("alpha"), int(2)),
            (string("zeta"), int(3)),
        ],
    });

    assert_eq!(hash.to_string(), r#"{"zeta": 1, "alpha": 2, "zeta": 3}"#);

    let empty = Expr::Hash(HashExpr {
        token: Token::new(TokenKind::OpenCurly, "{"),
        pairs: vec![],
    });
    assert_eq!(empty.to_string(), "{}");
}

#[test]
fn test_get_token_and_span() {
    let file = Rc::new("nodes.src".to_string());
    let mut plus = Token::new(TokenKind::Plus, "+");
    plus.span = Span {
        start: Position(2, Rc::clone(&file)),
        end: Position(3, Rc::clone(&file)),
    };

    let expr = Expr::Infix(InfixExpr {
        token: plus,
        operator: "+".to_string(),
        left: Box::new(int(1)),
        right: Box::new(int(2)),
    });

    assert_eq!(expr.get_token().kind, TokenKind::Plus);
    assert_eq!(expr.get_span().start.0, 2);
    assert_eq!(expr.get_span().end.0, 3);

    let stmt = expr_stmt(expr);
    assert_eq!(stmt.get_token().kind, TokenKind::Plus);
    assert_eq!(stmt.get_span().start.1.as_str(), "nodes.src");
}

#[derive(Default)]
struct IdentifierCollector<'ast> {
    names: Vec<&'ast str>,
}

impl<'ast> Visitor<'ast> for IdentifierCollector<'ast> {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        if let Expr::Identifier(ident) = expr {
            self.names.push(&ident.name);
        }
        walk_expr(self, expr);
    }
}

#[test]
fn test_visitor_walks_in_source_order() {
    // let f = fn(a) { if (a) { b } else { c } }; f(d)[e];
    let function = Expr::Function(FunctionExpr {
        token: Token::new(TokenKind::Fn, "fn"),
        parameters: vec![ident("a")],
        body: block(vec![expr_stmt(Expr::If(IfExpr {
            token: Token::new(TokenKind::If, "if"),
            condition: Box::new(Expr::Identifier(ident("a"))),
            consequence: block(vec![expr_stmt(Expr::Identifier(ident("b")))]),
            alternative: Some(block(vec![expr_stmt(Expr::Identifier(ident("c")))])),
        }))]),
    });

    let call = Expr::Call(CallExpr {
        token: Token::new(TokenKind::OpenParen, "("),
        callee: Box::new(Expr::Identifier(ident("f"))),
        arguments: vec![Expr::Identifier(ident("d"))],
    });

    let program = Program {
        statements: vec![
            Stmt::Let(LetStmt {
                token: Token::new(TokenKind::Let, "let"),
                name: ident("f"),
                value: function,
            }),
            expr_stmt(Expr::Index(IndexExpr {
                token: Token::new(TokenKind::OpenBracket, "["),
                collection: Box::new(call),
                index: Box::new(Expr::Identifier(ident("e"))),
            })),
        ],
    };

    let mut collector = IdentifierCollector::default();
    collector.visit_program(&program);

    assert_eq!(collector.names, ["a", "b", "c", "f", "d", "e"]);
}
