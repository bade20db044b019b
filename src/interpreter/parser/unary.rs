use std::io::Read;

use crate::{
    ast::Factor,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parser},
    },
};

impl<R: Read> Parser<R> {
    /// Parses a factor with its optional exponent.
    ///
    /// Grammar:
    /// ```text
    ///     factor := NUM          ["^" factor]
    ///             | "(" expr ")" ["^" factor]
    ///             | "|" expr "|" ["^" factor]
    /// ```
    /// The exponent is itself a factor, so `2 ^ 3 ^ 2` nests as
    /// `2 ^ (3 ^ 2)`.
    ///
    /// # Errors
    /// - `InvalidToken` if the current token cannot start a factor.
    /// - `NestingTooDeep` past [`MAX_NESTING_DEPTH`] nested `(`, `|` or `^`.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Factor> {
        let base = self.parse_primary()?;

        if self.current == Token::Expo {
            self.expect(Token::Expo)?;
            let power = self.nested(Self::parse_factor)?;
            return Ok(base.pow(power));
        }
        Ok(base)
    }

    /// Runs `parse` one nesting level deeper.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH }.into());
        }

        self.depth += 1;
        let parsed = parse(self);
        self.depth -= 1;
        parsed
    }

    /// Parses the part of a factor before any `^`.
    fn parse_primary(&mut self) -> ParseResult<Factor> {
        match self.current {
            Token::Num(n) => {
                self.advance()?;
                Ok(Factor::Number(n))
            },
            Token::Open => self.parse_grouping(),
            Token::Abs => self.parse_abs(),
            token => Err(ParseError::InvalidToken { token }.into()),
        }
    }

    /// Parses `"(" expr ")"`.
    fn parse_grouping(&mut self) -> ParseResult<Factor> {
        self.expect(Token::Open)?;
        let expr = self.nested(Self::parse_expr)?;
        self.expect(Token::Close)?;
        Ok(Factor::Group(Box::new(expr)))
    }

    /// Parses `"|" expr "|"`.
    fn parse_abs(&mut self) -> ParseResult<Factor> {
        self.expect(Token::Abs)?;
        let expr = self.nested(Self::parse_expr)?;
        self.expect(Token::Abs)?;
        Ok(Factor::Abs(Box::new(expr)))
    }
}
