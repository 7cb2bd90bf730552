use thiserror::Error;

use crate::error::ExpressionError;

/// Represents all ways an assignment line can be rejected.
///
/// No variable is ever written when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The line has no `=` at all.
    #[error("Expected \"=\"")]
    MissingEquals,
    /// More than one `=` sign on the line.
    #[error("Only 1 \"=\" sign allowed")]
    MultipleEquals,
    /// No letter to the left of `=`.
    #[error("Missing variable name before \"=\"")]
    MissingName,
    /// The right of `=` is not a valid expression.
    #[error("{0}")]
    Expression(#[from] ExpressionError),
}
