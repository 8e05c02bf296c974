use std::fmt::{self, Display};

use crate::lexer::tokens::Token;

use super::{
    ast::{write_separated, Expr, Stmt},
    expressions::IdentifierExpr,
};

/// Let Statement
/// Binds `name` to the value of an expression: `let x = 5;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: IdentifierExpr,
    pub value: Expr,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

/// Return Statement
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expr,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return {};", self.value)
    }
}

/// Expression Statement
/// A bare expression in statement position. The token is the first token of
/// the expression.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
}

// Only the expression counts: rendering can change which token comes first.
impl PartialEq for ExpressionStmt {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.expression)
    }
}

/// Block Statement
/// A braced sequence of statements, as found in `if` branches and function
/// bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub token: Token,
    pub body: Vec<Stmt>,
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            return f.write_str("{ }");
        }

        f.write_str("{ ")?;
        write_separated(f, &self.body, " ")?;
        f.write_str(" }")
    }
}
