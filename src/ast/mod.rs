/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the statement/expression sum types
/// - expressions: Payloads for the expression variants
/// - statements: Payloads for the statement variants
/// - visitor: Read-only traversal over a finished tree
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod visitor;

#[cfg(test)]
mod tests;
