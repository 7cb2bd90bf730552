use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates an exponentiation.
    ///
    /// Zero raised to a negative power is a division by zero. A negative base
    /// with a fractional exponent has no real result. A result that overflows
    /// to infinity from finite operands is reported as an overflow.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use linecalc::{error::RuntimeError, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_pow(2.0, -1.0), Ok(0.5));
    /// assert_eq!(Evaluator::eval_pow(0.0, -1.0), Err(RuntimeError::DivisionByZero));
    /// assert!(Evaluator::eval_pow(-8.0, 0.5).is_err());
    /// ```
    pub fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
        if base == 0.0 && exponent < 0.0 {
            return Err(RuntimeError::DivisionByZero);
        }

        let value = base.powf(exponent);
        let finite_operands = base.is_finite() && exponent.is_finite();
        if value.is_nan() && finite_operands {
            return Err(RuntimeError::ComplexResult { base:     base.to_string(),
                                                     exponent: exponent.to_string(), });
        }
        if value.is_infinite() && finite_operands {
            return Err(RuntimeError::Overflow { base:     base.to_string(),
                                                exponent: exponent.to_string(), });
        }
        Ok(value)
    }
}
