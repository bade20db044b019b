use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates an exponentiation.
///
/// Non-negative exponents use checked integer power. A negative exponent is
/// read as `1 / base^n` with truncating division: it is `1` for a base of `1`,
/// alternates between `-1` and `1` for a base of `-1`, fails with
/// `DivisionByZero` for a base of `0`, and truncates to `0` otherwise.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
///
/// # Returns
/// An `EvalResult<i64>` containing the result of `base ^ exponent`.
///
/// # Example
/// ```
/// use simcalc::interpreter::evaluator::binary::power::eval_pow;
///
/// assert_eq!(eval_pow(2, 10).unwrap(), 1024);
/// assert_eq!(eval_pow(2, -1).unwrap(), 0);
/// assert_eq!(eval_pow(-1, -3).unwrap(), -1);
/// ```
pub fn eval_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    if exponent < 0 {
        return match base {
            0 => Err(RuntimeError::DivisionByZero),
            -1 | 1 => Ok(unit_power(base, exponent)),
            _ => Ok(0),
        };
    }

    match u32::try_from(exponent) {
        Ok(e) => base.checked_pow(e)
                     .ok_or(RuntimeError::Overflow { op: BinaryOperator::Pow }),
        Err(_) => match base {
            -1..=1 => Ok(unit_power(base, exponent)),
            _ => Err(RuntimeError::Overflow { op: BinaryOperator::Pow }),
        },
    }
}

/// `base ^ exponent` for a base of `-1`, `0` or `1` and any non-zero
/// exponent.
const fn unit_power(base: i64, exponent: i64) -> i64 {
    if base == -1 && exponent % 2 == 0 { 1 } else { base }
}
