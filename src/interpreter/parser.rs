/// Parser state and the top-level productions.
///
/// Holds the lexer and the one-token lookahead slot, and parses the program
/// and its semicolon-separated expression list.
pub mod core;

/// Additive and multiplicative productions.
///
/// Parses `Expr`/`ExprRest` and `Term`/`TermRest`, the left-associative
/// levels of the grammar.
pub mod binary;

/// Factor productions.
///
/// Parses literals, parenthesized groups, absolute-value bars and the
/// right-associative exponent suffix.
pub mod unary;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, Parser};
