//! Parser module producing a flat, linked node array.
//!
//! This module contains the parser that pulls tokens from the lexer and
//! appends one node per significant token into an arena. It uses a Pratt
//! parser for expressions with a fixed precedence table and handles:
//!
//! - Statement parsing (`let` bindings, `while` loops, `break`, expressions)
//! - Expression parsing (binary operators, groupings, `if` expressions)
//! - Backward links from every node to the production it belongs to
//! - First-error reporting with the offending token kept for diagnostics
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
