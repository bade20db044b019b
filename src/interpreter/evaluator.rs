/// Core evaluation logic.
///
/// Walks the syntax tree of a program, folding operator chains left to right,
/// and renders the resulting values.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic for `+ - * / ^`.
pub mod binary;

/// Unary evaluation.
///
/// Handles the absolute-value bars.
pub mod unary;
