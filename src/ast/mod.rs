/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` trait and the `Program` root
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
/// - printer: Canonical, fully parenthesised rendering of any node
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;

#[cfg(test)]
mod tests;
