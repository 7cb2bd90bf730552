use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    token::Operator,
};

impl Evaluator<'_> {
    /// Applies a binary operator to two numbers.
    ///
    /// `+`, `-`, `*` and `/` go to [`Evaluator::eval_scalar_op`]; `^` goes to
    /// [`Evaluator::eval_pow`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::{evaluator::core::Evaluator, token::Operator};
    ///
    /// assert_eq!(Evaluator::apply_operator(Operator::Pow, 2.0, 10.0).unwrap(), 1024.0);
    /// assert_eq!(Evaluator::apply_operator(Operator::Div, 12.0, -6.0).unwrap(), -2.0);
    /// ```
    pub fn apply_operator(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
        match op {
            Operator::Pow => Self::eval_pow(left, right),
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div => {
                Self::eval_scalar_op(op, left, right)
            },
        }
    }
}
