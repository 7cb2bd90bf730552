use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        token::Operator,
    },
};

impl Evaluator<'_> {
    /// Evaluates `+`, `-`, `*` or `/` on two numbers.
    ///
    /// Division by zero, including negative zero, is an error rather than an
    /// infinity. `^` is passed on to [`Evaluator::eval_pow`].
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Evaluator, token::Operator},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_scalar_op(Operator::Mul, 12.0, -6.0), Ok(-72.0));
    /// assert_eq!(Evaluator::eval_scalar_op(Operator::Div, 1.0, 0.0),
    ///            Err(RuntimeError::DivisionByZero));
    /// assert_eq!(Evaluator::eval_scalar_op(Operator::Pow, 2.0, 3.0), Ok(8.0));
    /// ```
    pub fn eval_scalar_op(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
            Operator::Pow => Self::eval_pow(left, right),
        }
    }
}
