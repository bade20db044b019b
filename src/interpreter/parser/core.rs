use std::io::Read;

use crate::{
    ast::{ExprList, ExprListRest, Link, Program, relink},
    error::{CalcError, ParseError},
    interpreter::lexer::{Lexer, Token},
};

/// Result type used by the parser.
///
/// Lexical errors surface through the parser unchanged, so parse steps
/// return the whole error family.
pub type ParseResult<T> = Result<T, CalcError>;

/// Deepest factor nesting the parser accepts.
///
/// Every `(`, `|` and `^` nests one factor inside another. Bounding the depth
/// bounds the recursion of both parsing and evaluation.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Predictive top-down parser with a single token of lookahead.
///
/// Each production is chosen by looking at `current` alone; the grammar never
/// needs to backtrack.
pub struct Parser<R: Read> {
    pub(in crate::interpreter::parser) lexer:   Lexer<R>,
    pub(in crate::interpreter::parser) current: Token,
    pub(in crate::interpreter::parser) depth:   usize,
}

impl<R: Read> Parser<R> {
    /// Creates a parser that pulls tokens from `lexer`.
    pub fn new(lexer: Lexer<R>) -> Self {
        Self { lexer,
               current: Token::Eof,
               depth: 0 }
    }

    /// Parses a complete program.
    ///
    /// Grammar: `program := expr_list "."`
    ///
    /// The parser is consumed, so nothing carries over between programs.
    /// Tokens after the final `.` are never read.
    ///
    /// # Errors
    /// Returns the first lexical or parse error encountered.
    ///
    /// # Example
    /// ```
    /// use simcalc::interpreter::{lexer::Lexer, parser::Parser};
    ///
    /// let program = Parser::new(Lexer::new("1 + 2; 3.".as_bytes())).parse().unwrap();
    /// assert_eq!(program.to_string(), "1 + 2; 3.");
    /// ```
    pub fn parse(mut self) -> ParseResult<Program> {
        self.current = self.lexer.next_token()?;
        let list = self.parse_expr_list()?;
        self.check(Token::Stop)?;

        log::debug!("parsed program {list}.");
        Ok(Program { list })
    }

    /// Accepts the current token if it is `expected` and moves to the next
    /// one.
    ///
    /// Only payload-free tokens are ever expected; literals are consumed
    /// through [`Parser::advance`] once a factor has matched them.
    ///
    /// # Errors
    /// Returns `ParseError::Mismatch` naming both tokens when the current token
    /// differs, or the lexical error raised while fetching the next token.
    pub(in crate::interpreter::parser) fn expect(&mut self, expected: Token) -> ParseResult<()> {
        self.check(expected)?;
        log::trace!("matched {expected}");
        self.advance()?;
        Ok(())
    }

    /// Fails unless the current token is `expected`, without consuming it.
    fn check(&self, expected: Token) -> ParseResult<()> {
        if self.current == expected {
            Ok(())
        } else {
            Err(ParseError::Mismatch { expected,
                                       found: self.current }.into())
        }
    }

    /// Replaces the current token with the next one from the lexer and
    /// returns the token that was current.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Parses a semicolon-separated list of expressions.
    ///
    /// Grammar:
    /// ```text
    ///     expr_list      := expr expr_list_rest
    ///     expr_list_rest := ";" expr expr_list_rest | ε
    /// ```
    /// The rest chain is read with a loop and linked afterwards.
    fn parse_expr_list(&mut self) -> ParseResult<ExprList> {
        let expr = self.parse_expr()?;

        let mut links = Vec::new();
        while self.current == Token::Break {
            self.expect(Token::Break)?;
            links.push((ExprListRest::Next as Link<_, _>, self.parse_expr()?));
        }
        let rest = relink(links, ExprListRest::Empty);

        Ok(ExprList { expr, rest })
    }
}
