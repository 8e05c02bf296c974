//! Visitor pattern for AST nodes.
//!
//! Implementors override only the hooks they care about; the default hooks
//! call the matching `walk_*` function, which visits children in source order.

use super::{
    ast::{Expr, Program, Stmt},
    statements::BlockStmt,
};

pub trait Visitor<'ast>: Sized {
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_block(&mut self, block: &'ast BlockStmt) {
        walk_block(self, block);
    }
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_program<'ast>(visitor: &mut impl Visitor<'ast>, program: &'ast Program) {
    for stmt in &program.statements {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_block<'ast>(visitor: &mut impl Visitor<'ast>, block: &'ast BlockStmt) {
    for stmt in &block.body {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'ast>(visitor: &mut impl Visitor<'ast>, stmt: &'ast Stmt) {
    match stmt {
        Stmt::Let(stmt) => visitor.visit_expr(&stmt.value),
        Stmt::Return(stmt) => visitor.visit_expr(&stmt.value),
        Stmt::Expression(stmt) => visitor.visit_expr(&stmt.expression),
        Stmt::Block(block) => visitor.visit_block(block),
    }
}

pub fn walk_expr<'ast>(visitor: &mut impl Visitor<'ast>, expr: &'ast Expr) {
    match expr {
        Expr::Identifier(_) | Expr::Integer(_) | Expr::Boolean(_) | Expr::String(_) => {}
        Expr::Prefix(expr) => visitor.visit_expr(&expr.right),
        Expr::Infix(expr) => {
            visitor.visit_expr(&expr.left);
            visitor.visit_expr(&expr.right);
        }
        Expr::If(expr) => {
            visitor.visit_expr(&expr.condition);
            visitor.visit_block(&expr.consequence);
            if let Some(alternative) = &expr.alternative {
                visitor.visit_block(alternative);
            }
        }
        Expr::Function(expr) => visitor.visit_block(&expr.body),
        Expr::Call(expr) => {
            visitor.visit_expr(&expr.callee);
            for argument in &expr.arguments {
                visitor.visit_expr(argument);
            }
        }
        Expr::Array(expr) => {
            for element in &expr.elements {
                visitor.visit_expr(element);
            }
        }
        Expr::Hash(expr) => {
            for (key, value) in &expr.pairs {
                visitor.visit_expr(key);
                visitor.visit_expr(value);
            }
        }
        Expr::Index(expr) => {
            visitor.visit_expr(&expr.collection);
            visitor.visit_expr(&expr.index);
        }
    }
}
