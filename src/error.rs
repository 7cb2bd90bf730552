/// Tokenization errors.
///
/// Everything that makes a line of text an invalid expression: operator runs
/// that are too long, trailing operators, unsupported characters and
/// unbalanced parentheses.
pub mod expression_error;
/// Assignment syntax errors.
///
/// Raised while splitting `name = expression` lines. Errors from tokenizing
/// the right-hand side are wrapped here as well.
pub mod assignment_error;
/// Evaluation errors.
///
/// Arithmetic faults such as division by zero, plus the internal consistency
/// faults that a well-formed expression never triggers.
pub mod runtime_error;

pub use assignment_error::AssignmentError;
pub use expression_error::ExpressionError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// The error returned at the boundary of a single evaluated line.
///
/// A session never terminates on any of these; the caller reports the message
/// and reads the next line with the variable table unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The line is not a valid expression.
    #[error("Invalid expression: {0}")]
    InvalidExpression(#[from] ExpressionError),
    /// The line is not a valid assignment.
    #[error("Invalid assignment: {0}")]
    InvalidAssignment(#[from] AssignmentError),
    /// The expression was valid but could not be computed.
    #[error("{0}")]
    Runtime(#[from] RuntimeError),
}
