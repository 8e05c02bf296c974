use std::fmt::{self, Display};

use crate::{lexer::tokens::Token, Span};

use super::{
    expressions::{
        ArrayExpr, BooleanExpr, CallExpr, FunctionExpr, HashExpr, IdentifierExpr, IfExpr,
        IndexExpr, InfixExpr, IntegerExpr, PrefixExpr, StringExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// The root of a parsed source: every statement in source order.
///
/// `Display` renders canonical source text which parses back to the same tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.statements, " ")
    }
}

/// Statement
///
/// Every statement kind the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Stmt {
    /// The token the statement started at.
    pub fn get_token(&self) -> &Token {
        match self {
            Stmt::Let(stmt) => &stmt.token,
            Stmt::Return(stmt) => &stmt.token,
            Stmt::Expression(stmt) => &stmt.token,
            Stmt::Block(stmt) => &stmt.token,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.get_token().span
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => Display::fmt(stmt, f),
            Stmt::Return(stmt) => Display::fmt(stmt, f),
            Stmt::Expression(stmt) => Display::fmt(stmt, f),
            Stmt::Block(stmt) => Display::fmt(stmt, f),
        }
    }
}

/// Expression
///
/// Every expression kind the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    String(StringExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionExpr),
    Call(CallExpr),
    Array(ArrayExpr),
    Hash(HashExpr),
    Index(IndexExpr),
}

impl Expr {
    /// The token the expression was built from: the literal itself for
    /// atoms, the operator or opening delimiter for everything else.
    pub fn get_token(&self) -> &Token {
        match self {
            Expr::Identifier(expr) => &expr.token,
            Expr::Integer(expr) => &expr.token,
            Expr::Boolean(expr) => &expr.token,
            Expr::String(expr) => &expr.token,
            Expr::Prefix(expr) => &expr.token,
            Expr::Infix(expr) => &expr.token,
            Expr::If(expr) => &expr.token,
            Expr::Function(expr) => &expr.token,
            Expr::Call(expr) => &expr.token,
            Expr::Array(expr) => &expr.token,
            Expr::Hash(expr) => &expr.token,
            Expr::Index(expr) => &expr.token,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.get_token().span
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(expr) => Display::fmt(expr, f),
            Expr::Integer(expr) => Display::fmt(expr, f),
            Expr::Boolean(expr) => Display::fmt(expr, f),
            Expr::String(expr) => Display::fmt(expr, f),
            Expr::Prefix(expr) => Display::fmt(expr, f),
            Expr::Infix(expr) => Display::fmt(expr, f),
            Expr::If(expr) => Display::fmt(expr, f),
            Expr::Function(expr) => Display::fmt(expr, f),
            Expr::Call(expr) => Display::fmt(expr, f),
            Expr::Array(expr) => Display::fmt(expr, f),
            Expr::Hash(expr) => Display::fmt(expr, f),
            Expr::Index(expr) => Display::fmt(expr, f),
        }
    }
}

pub(crate) fn write_separated<T: Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", item)?;
    }

    Ok(())
}
