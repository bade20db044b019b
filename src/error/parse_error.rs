use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// The current token is not the one the active production requires.
    Mismatch {
        /// The token the grammar required.
        expected: Token,
        /// The token actually found.
        found:    Token,
    },
    /// A factor was required but the current token cannot start one.
    InvalidToken {
        /// The token encountered.
        token: Token,
    },
    /// Parentheses, bars or exponents are nested beyond the supported depth.
    NestingTooDeep {
        /// The maximum supported depth.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mismatch { expected, found } => {
                write!(f, "Expected: {expected}. Found: {found}")
            },
            Self::InvalidToken { token } => write!(f, "Token {token} is invalid here"),
            Self::NestingTooDeep { limit } => {
                write!(f, "Expression nesting exceeds the limit of {limit}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
