/// Lexical errors.
///
/// Raised by the lexer when the character stream contains something that is
/// not part of the language, a literal that does not fit in an integer, or
/// when reading the underlying source fails.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines the errors raised when the current token does not fit the active
/// grammar production.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the arithmetic failures that can happen while a parsed program is
/// evaluated, such as division by zero or integer overflow.
pub mod runtime_error;

pub use lexical_error::LexicalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Every error the interpreter can report.
///
/// Lexer and parser errors are threaded through the parser with `?`, runtime
/// errors come out of evaluation. The `Display` form is the message the
/// driver prints.
pub enum CalcError {
    /// The character stream could not be tokenized.
    Lexical(LexicalError),
    /// The token stream does not match the grammar.
    Parse(ParseError),
    /// Evaluation of a well-formed program failed.
    Runtime(RuntimeError),
}

impl CalcError {
    /// Returns `true` for lexical errors.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::Lexical(_))
    }

    /// Returns `true` for parse errors.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns `true` for runtime errors.
    #[must_use]
    pub const fn is_runtime(&self) -> bool {
        matches!(self, Self::Runtime(_))
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "Lexical error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Runtime(e) => write!(f, "Runtime error: {e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexicalError> for CalcError {
    fn from(value: LexicalError) -> Self {
        Self::Lexical(value)
    }
}

impl From<ParseError> for CalcError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
