use std::io::Read;

use crate::{
    ast::{Expr, ExprRest, Factor, Link, Term, TermRest, relink},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl<R: Read> Parser<R> {
    /// Parses addition and subtraction.
    ///
    /// Grammar:
    /// ```text
    ///     expr      := term expr_rest
    ///     expr_rest := "+" term expr_rest
    ///                | "-" term expr_rest
    ///                | ε
    /// ```
    /// Operators are kept in source order so evaluation folds them left to
    /// right.
    pub(in crate::interpreter::parser) fn parse_expr(&mut self) -> ParseResult<Expr> {
        let term = self.parse_term()?;

        let mut links = Vec::new();
        loop {
            let link: Link<Term, ExprRest> = match self.current {
                Token::Plus => ExprRest::Plus,
                Token::Minus => ExprRest::Minus,
                _ => break,
            };
            self.advance()?;
            links.push((link, self.parse_term()?));
        }

        Ok(Expr { term,
                  rest: relink(links, ExprRest::Empty) })
    }

    /// Parses multiplication and division.
    ///
    /// Grammar:
    /// ```text
    ///     term      := factor term_rest
    ///     term_rest := "*" factor term_rest
    ///                | "/" factor term_rest
    ///                | ε
    /// ```
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Term> {
        let factor = self.parse_factor()?;

        let mut links = Vec::new();
        loop {
            let link: Link<Factor, TermRest> = match self.current {
                Token::Multi => TermRest::Multiply,
                Token::Div => TermRest::Divide,
                _ => break,
            };
            self.advance()?;
            links.push((link, self.parse_factor()?));
        }

        Ok(Term { factor,
                  rest: relink(links, TermRest::Empty) })
    }
}
