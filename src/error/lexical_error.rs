#[derive(Debug)]
/// Represents all errors that can occur while tokenizing the source.
pub enum LexicalError {
    /// A character that does not start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// A digit run too large to be represented as an integer.
    LiteralTooLarge {
        /// The digits as they appeared in the source.
        literal: String,
    },
    /// Reading from the underlying source failed.
    Io {
        /// The error reported by the reader.
        source: std::io::Error,
    },
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character } => write!(f, "Invalid character '{character}'"),
            Self::LiteralTooLarge { literal } => {
                write!(f, "Integer literal {literal} is too large")
            },
            Self::Io { .. } => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for LexicalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LexicalError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}
