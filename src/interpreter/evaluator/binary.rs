/// Dispatch from an operator to its implementation.
pub mod core;

/// Checked `+ - * /` on integers.
pub mod scalar;

/// Integer exponentiation.
pub mod power;

pub use self::core::eval_binary;
