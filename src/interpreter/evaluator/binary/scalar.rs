use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::{binary::power::eval_pow, core::EvalResult},
};

/// Evaluates a scalar arithmetic operation.
///
/// All operations are checked. Division truncates toward zero, so `7 / 2` is
/// `3` and `-7 / 2` is `-3`. `Pow` is handed to [`eval_pow`].
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<i64>` containing the computed value.
///
/// # Errors
/// - `DivisionByZero` when dividing by `0`.
/// - `Overflow` when the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use simcalc::{ast::BinaryOperator, interpreter::evaluator::binary::scalar::eval_scalar_op};
///
/// assert_eq!(eval_scalar_op(BinaryOperator::Div, 7, 2).unwrap(), 3);
/// assert!(eval_scalar_op(BinaryOperator::Div, 1, 0).is_err());
/// assert_eq!(eval_scalar_op(BinaryOperator::Pow, 2, 3).unwrap(), 8);
/// ```
pub fn eval_scalar_op(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right)
        },
        Pow => return eval_pow(left, right),
    };

    result.ok_or(RuntimeError::Overflow { op })
}
