use crate::ast::BinaryOperator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero, including a zero base raised to a negative
    /// power.
    DivisionByZero,
    /// A binary operation produced a value outside the integer range.
    Overflow {
        /// The operation that overflowed.
        op: BinaryOperator,
    },
    /// The absolute value of the smallest integer is not representable.
    AbsOverflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Overflow { op } => write!(f, "Integer overflow while evaluating '{op}'"),
            Self::AbsOverflow => {
                write!(f, "Integer overflow while taking an absolute value")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
