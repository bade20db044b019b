use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::{
        binary::{power::eval_pow, scalar::eval_scalar_op},
        core::EvalResult,
    },
};

/// Evaluates a binary operation between two integers.
///
/// Arithmetic operators go to [`eval_scalar_op`], exponentiation to
/// [`eval_pow`].
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<i64>` containing the evaluated result.
///
/// # Example
/// ```
/// use simcalc::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Add, 3, 4).unwrap(), 7);
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2, 10).unwrap(), 1024);
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    match op {
        BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
            eval_scalar_op(op, left, right)
        },
        BinaryOperator::Pow => eval_pow(left, right),
    }
}
