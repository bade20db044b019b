use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates the absolute value of an integer.
///
/// # Errors
/// Returns `AbsOverflow` for `i64::MIN`, whose magnitude does not fit in an
/// `i64`.
///
/// # Example
/// ```
/// use simcalc::interpreter::evaluator::unary::eval_abs;
///
/// assert_eq!(eval_abs(-3).unwrap(), 3);
/// assert!(eval_abs(i64::MIN).is_err());
/// ```
pub fn eval_abs(value: i64) -> EvalResult<i64> {
    value.checked_abs().ok_or(RuntimeError::AbsOverflow)
}
