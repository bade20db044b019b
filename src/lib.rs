//! # simcalc
//!
//! simcalc is an interpreter for a small integer calculator language written
//! in Rust. A program is a list of expressions separated by `;` and ended by
//! `.`; expressions combine integer literals with `+ - * /`, parentheses,
//! absolute-value bars and right-associative `^`.
//!
//! ```text
//! 1 + 1; |2 - 5| ^ 2; 2 ^ 3 ^ 2.
//! ```
//! prints `2; 9; 512.`

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Read;

use crate::{
    ast::Program,
    error::{CalcError, LexicalError},
    interpreter::{
        evaluator::core::render,
        lexer::{Lexer, Token},
        parser::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares one type per grammar nonterminal, with a closed enum
/// for every nonterminal that has alternatives. The tree is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Models programs, expression lists, expressions, terms and factors.
/// - Renders nodes back to canonical source text.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program
/// and the [`CalcError`](error::CalcError) family that wraps them.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Formats the messages the driver prints.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a program from a character source.
///
/// Only the characters up to and including the terminating `.` are read.
///
/// # Errors
/// Returns a lexical or parse error describing the first problem found.
///
/// # Examples
/// ```
/// use simcalc::parse;
///
/// let program = parse("2^3^2.".as_bytes()).unwrap();
/// assert_eq!(program.to_string(), "2 ^ 3 ^ 2.");
///
/// assert!(parse("1 + .".as_bytes()).unwrap_err().is_parse());
/// ```
pub fn parse<R: Read>(reader: R) -> Result<Program, CalcError> {
    Parser::new(Lexer::new(reader)).parse()
}

/// Parses and evaluates a program, returning its printed output.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. Nothing is
/// produced for a program whose evaluation fails part way.
pub fn interpret<R: Read>(reader: R) -> Result<String, CalcError> {
    let program = parse(reader)?;
    let values = program.eval()?;
    Ok(render(&values))
}

/// Returns the printed output of the program in `source`.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use simcalc::get_result;
///
/// assert_eq!(get_result("1 + 1; 2 * 2.").unwrap(), "2; 4.");
///
/// // Unknown character.
/// let err = get_result("1 & 2.").unwrap_err();
/// assert_eq!(err.to_string(), "Lexical error: Invalid character '&'");
/// ```
pub fn get_result(source: &str) -> Result<String, CalcError> {
    interpret(source.as_bytes())
}

/// Splits `source` into tokens, excluding the final end-of-input marker.
///
/// # Errors
/// Returns the first lexical error.
///
/// # Examples
/// ```
/// use simcalc::{interpreter::lexer::Token, tokenize};
///
/// assert_eq!(tokenize("|4|.").unwrap(),
///            vec![Token::Abs, Token::Num(4), Token::Abs, Token::Stop]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(source.as_bytes()).collect()
}
