use crate::{
    ast::{BinaryOperator, Expr, ExprList, Factor, Program, Term},
    error::RuntimeError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_abs},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Program {
    /// Evaluates every expression of the program, in source order.
    ///
    /// Evaluation stops at the first runtime error.
    ///
    /// # Example
    /// ```
    /// use simcalc::parse;
    ///
    /// let program = parse("1 + 1; 2 * 2.".as_bytes()).unwrap();
    /// assert_eq!(program.eval().unwrap(), vec![2, 4]);
    /// ```
    pub fn eval(&self) -> EvalResult<Vec<i64>> {
        let values = self.list.eval()?;
        log::debug!("evaluated {} expression(s)", values.len());
        Ok(values)
    }
}

impl ExprList {
    /// Evaluates the list into one value per expression.
    pub fn eval(&self) -> EvalResult<Vec<i64>> {
        let mut values = vec![self.expr.eval()?];
        for expr in self.rest.links() {
            values.push(expr.eval()?);
        }
        Ok(values)
    }
}

impl Expr {
    /// Evaluates a sum or difference.
    ///
    /// Starts from the first term and applies each `+`/`-` link in order,
    /// which makes `5 - 2 - 1` equal to `2`.
    pub fn eval(&self) -> EvalResult<i64> {
        self.rest
            .links()
            .try_fold(self.term.eval()?, |value, (op, term)| eval_binary(op, value, term.eval()?))
    }
}

impl Term {
    /// Evaluates a product or quotient, folding `*`/`/` left to right.
    pub fn eval(&self) -> EvalResult<i64> {
        self.rest
            .links()
            .try_fold(self.factor.eval()?, |value, (op, factor)| {
                eval_binary(op, value, factor.eval()?)
            })
    }
}

impl Factor {
    /// Evaluates a factor.
    ///
    /// The base of an exponent is evaluated before its power; bars take the
    /// absolute value before any outer `^` applies.
    pub fn eval(&self) -> EvalResult<i64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Group(expr) => expr.eval(),
            Self::Abs(expr) => eval_abs(expr.eval()?),
            Self::Exponent { base, power } => {
                let base = base.eval()?;
                eval_binary(BinaryOperator::Pow, base, power.eval()?)
            },
        }
    }
}

/// Renders program results the way the language prints them.
///
/// Values are separated by `"; "` and the output ends with `"."`, mirroring
/// the source's separators and terminator.
///
/// # Example
/// ```
/// use simcalc::interpreter::evaluator::core::render;
///
/// assert_eq!(render(&[2, 4]), "2; 4.");
/// assert_eq!(render(&[-7]), "-7.");
/// ```
#[must_use]
pub fn render(values: &[i64]) -> String {
    let body = values.iter()
                     .map(i64::to_string)
                     .collect::<Vec<_>>()
                     .join("; ");
    format!("{body}.")
}
