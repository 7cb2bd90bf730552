use thiserror::Error;

/// Represents all ways a line of text can fail to tokenize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// The line contained nothing but whitespace.
    #[error("Empty expression")]
    Empty,
    /// More than two operator characters appeared in a row, or an operator
    /// other than a sign followed another operator.
    #[error("Too many operators in a row")]
    TooManyOperators,
    /// The line started with an operator that cannot act as a sign.
    #[error("Cannot start with '{op}'")]
    LeadingOperator {
        /// The offending operator character.
        op: char,
    },
    /// The line or a parenthesised group ended on an operator.
    #[error("Cannot end with operators")]
    TrailingOperator,
    /// A character that is neither a digit, an operator, a parenthesis,
    /// whitespace nor a known variable.
    #[error("Unsupported operation: '{ch}'")]
    UnsupportedCharacter {
        /// The character that was rejected.
        ch: char,
    },
    /// A closing parenthesis had no opening parenthesis to match.
    #[error("Cannot have more closing than opening parentheses")]
    UnbalancedParentheses,
    /// A group `()` with nothing inside.
    #[error("Parentheses cannot be empty")]
    EmptyGroup,
    /// A number literal too large to be represented.
    #[error("Literal is too large")]
    LiteralTooLarge,
}
