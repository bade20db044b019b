//! Syntax tree of a calculator program.
//!
//! Each nonterminal of the grammar has its own type, and every nonterminal
//! with alternatives is a closed enum:
//!
//! ```text
//! Program      -> ExprList STOP
//! ExprList     -> Expr ExprListRest
//! ExprListRest -> BREAK Expr ExprListRest | ε
//! Expr         -> Term ExprRest
//! ExprRest     -> PLUS Term ExprRest | MINUS Term ExprRest | ε
//! Term         -> Factor TermRest
//! TermRest     -> MULTI Factor TermRest | DIV Factor TermRest | ε
//! Factor       -> NUM [EXPO Factor]
//!               | OPEN Expr CLOSE [EXPO Factor]
//!               | ABS Expr ABS [EXPO Factor]
//! ```
//!
//! Nodes own their children, and `Display` renders a node back into source
//! text that parses to an equal tree.

use std::fmt;

/// A binary operator of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

/// A whole program: one or more expressions terminated by `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The semicolon-separated expressions.
    pub list: ExprList,
}

/// The first expression of a program and the chain of the remaining ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprList {
    /// The first expression.
    pub expr: Expr,
    /// Expressions following a `;`.
    pub rest: ExprListRest,
}

/// The tail of an expression list.
pub enum ExprListRest {
    /// No further expressions.
    Empty,
    /// `; expr` followed by more of the list.
    Next(Expr, Box<Self>),
}

/// A sum or difference of terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    /// The leftmost term.
    pub term: Term,
    /// The terms added or subtracted, in source order.
    pub rest: ExprRest,
}

/// The tail of an expression.
pub enum ExprRest {
    /// End of the expression.
    Empty,
    /// `+ term` followed by more of the expression.
    Plus(Term, Box<Self>),
    /// `- term` followed by more of the expression.
    Minus(Term, Box<Self>),
}

/// A product or quotient of factors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The leftmost factor.
    pub factor: Factor,
    /// The factors multiplied or divided, in source order.
    pub rest:   TermRest,
}

/// The tail of a term.
pub enum TermRest {
    /// End of the term.
    Empty,
    /// `* factor` followed by more of the term.
    Multiply(Factor, Box<Self>),
    /// `/ factor` followed by more of the term.
    Divide(Factor, Box<Self>),
}

/// An atomic value, optionally raised to a power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
    /// An integer literal.
    Number(i64),
    /// A parenthesized expression.
    Group(Box<Expr>),
    /// An expression between absolute-value bars.
    Abs(Box<Expr>),
    /// `base ^ power`. The base is never itself an `Exponent`; chains nest in
    /// `power`, which makes `^` right-associative.
    Exponent {
        /// The value being raised.
        base:  Box<Self>,
        /// The exponent.
        power: Box<Self>,
    },
}

impl Factor {
    /// Wraps `self` as the base of `base ^ power`.
    #[must_use]
    pub fn pow(self, power: Self) -> Self {
        Self::Exponent { base:  Box::new(self),
                         power: Box::new(power), }
    }
}

/// Constructor of one link of a rest chain, such as `ExprRest::Plus`.
pub type Link<T, R> = fn(T, Box<R>) -> R;

/// Builds a rest chain from its links in source order.
///
/// The chain is assembled back to front, so no step recurses.
pub fn relink<T, R>(links: Vec<(Link<T, R>, T)>, empty: R) -> R {
    links.into_iter()
         .rev()
         .fold(empty, |rest, (link, item)| link(item, Box::new(rest)))
}

// Rest chains are as long as the input. Everything that walks one (drop,
// clone, comparison, formatting) does it in a loop rather than once per link.

impl ExprListRest {
    /// Splits off the first link.
    fn split(&self) -> Option<(Link<Expr, Self>, &Expr, &Self)> {
        match self {
            Self::Empty => None,
            Self::Next(expr, next) => Some((Self::Next as Link<_, _>, expr, &**next)),
        }
    }

    /// Iterates over the expressions of the chain, in source order.
    pub fn links(&self) -> impl Iterator<Item = &Expr> + '_ {
        let mut rest = self;
        std::iter::from_fn(move || {
            let (_, expr, next) = rest.split()?;
            rest = next;
            Some(expr)
        })
    }
}

impl ExprRest {
    fn split(&self) -> Option<(BinaryOperator, Link<Term, Self>, &Term, &Self)> {
        match self {
            Self::Empty => None,
            Self::Plus(term, next) => {
                Some((BinaryOperator::Add, Self::Plus as Link<_, _>, term, &**next))
            },
            Self::Minus(term, next) => {
                Some((BinaryOperator::Sub, Self::Minus as Link<_, _>, term, &**next))
            },
        }
    }

    /// Iterates over `(operator, term)` pairs, in source order.
    pub fn links(&self) -> impl Iterator<Item = (BinaryOperator, &Term)> + '_ {
        let mut rest = self;
        std::iter::from_fn(move || {
            let (op, _, term, next) = rest.split()?;
            rest = next;
            Some((op, term))
        })
    }
}

impl TermRest {
    fn split(&self) -> Option<(BinaryOperator, Link<Factor, Self>, &Factor, &Self)> {
        match self {
            Self::Empty => None,
            Self::Multiply(factor, next) => {
                Some((BinaryOperator::Mul, Self::Multiply as Link<_, _>, factor, &**next))
            },
            Self::Divide(factor, next) => {
                Some((BinaryOperator::Div, Self::Divide as Link<_, _>, factor, &**next))
            },
        }
    }

    /// Iterates over `(operator, factor)` pairs, in source order.
    pub fn links(&self) -> impl Iterator<Item = (BinaryOperator, &Factor)> + '_ {
        let mut rest = self;
        std::iter::from_fn(move || {
            let (op, _, factor, next) = rest.split()?;
            rest = next;
            Some((op, factor))
        })
    }
}

impl Clone for ExprListRest {
    fn clone(&self) -> Self {
        let mut links = Vec::new();
        let mut rest = self;
        while let Some((link, expr, next)) = rest.split() {
            links.push((link, expr.clone()));
            rest = next;
        }
        relink(links, Self::Empty)
    }
}

impl Clone for ExprRest {
    fn clone(&self) -> Self {
        let mut links = Vec::new();
        let mut rest = self;
        while let Some((_, link, term, next)) = rest.split() {
            links.push((link, term.clone()));
            rest = next;
        }
        relink(links, Self::Empty)
    }
}

impl Clone for TermRest {
    fn clone(&self) -> Self {
        let mut links = Vec::new();
        let mut rest = self;
        while let Some((_, link, factor, next)) = rest.split() {
            links.push((link, factor.clone()));
            rest = next;
        }
        relink(links, Self::Empty)
    }
}

impl PartialEq for ExprListRest {
    fn eq(&self, other: &Self) -> bool {
        self.links().eq(other.links())
    }
}

impl Eq for ExprListRest {}

impl PartialEq for ExprRest {
    fn eq(&self, other: &Self) -> bool {
        self.links().eq(other.links())
    }
}

impl Eq for ExprRest {}

impl PartialEq for TermRest {
    fn eq(&self, other: &Self) -> bool {
        self.links().eq(other.links())
    }
}

impl Eq for TermRest {}

impl fmt::Debug for ExprListRest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.links()).finish()
    }
}

impl fmt::Debug for ExprRest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.links()).finish()
    }
}

impl fmt::Debug for TermRest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.links()).finish()
    }
}

impl Drop for ExprListRest {
    fn drop(&mut self) {
        let Self::Next(_, next) = self else { return };
        let mut link = std::mem::replace(next.as_mut(), Self::Empty);
        while let Self::Next(_, next) = &mut link {
            link = std::mem::replace(next.as_mut(), Self::Empty);
        }
    }
}

impl Drop for ExprRest {
    fn drop(&mut self) {
        let (Self::Plus(_, next) | Self::Minus(_, next)) = self else { return };
        let mut link = std::mem::replace(next.as_mut(), Self::Empty);
        while let Self::Plus(_, next) | Self::Minus(_, next) = &mut link {
            link = std::mem::replace(next.as_mut(), Self::Empty);
        }
    }
}

impl Drop for TermRest {
    fn drop(&mut self) {
        let (Self::Multiply(_, next) | Self::Divide(_, next)) = self else { return };
        let mut link = std::mem::replace(next.as_mut(), Self::Empty);
        while let Self::Multiply(_, next) | Self::Divide(_, next) = &mut link {
            link = std::mem::replace(next.as_mut(), Self::Empty);
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", self.list)
    }
}

impl fmt::Display for ExprList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        for expr in self.rest.links() {
            write!(f, "; {expr}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term)?;
        for (op, term) in self.rest.links() {
            write!(f, " {op} {term}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.factor)?;
        for (op, factor) in self.rest.links() {
            write!(f, " {op} {factor}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Group(expr) => write!(f, "({expr})"),
            Self::Abs(expr) => write!(f, "|{expr}|"),
            Self::Exponent { base, power } => write!(f, "{base} ^ {power}"),
        }
    }
}
