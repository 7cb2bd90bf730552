use thiserror::Error;

/// Represents all errors that can occur while reducing an expression.
///
/// The first four variants are arithmetic faults a user can trigger. The rest
/// are internal faults: expressions produced by the tokenizer never reach
/// them, but hand-built token sequences can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Attempted division by zero, or zero raised to a negative power.
    #[error("Division by zero")]
    DivisionByZero,
    /// An exponentiation overflowed to infinity.
    #[error("Numeric overflow while computing {base} ^ {exponent}")]
    Overflow {
        /// The base, formatted.
        base:     String,
        /// The exponent, formatted.
        exponent: String,
    },
    /// An exponentiation has no real result, such as `(-8)^(1/3)`.
    #[error("{base} ^ {exponent} has no real result")]
    ComplexResult {
        /// The base, formatted.
        base:     String,
        /// The exponent, formatted.
        exponent: String,
    },
    /// Parentheses are nested deeper than the configured limit.
    #[error("Parentheses nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit: usize,
    },
    /// A variable reached evaluation without a stored value.
    #[error("Internal error: unknown variable '{name}'")]
    UnknownVariable {
        /// The variable name.
        name: char,
    },
    /// An operator was missing its left or right operand.
    #[error("Internal error: operator '{op}' is missing an operand")]
    MissingOperand {
        /// The operator symbol.
        op: char,
    },
    /// A parenthesis reached evaluation without its partner.
    #[error("Internal error: unbalanced parentheses")]
    UnbalancedGroup,
    /// The final reduction did not leave exactly one number.
    #[error("Internal error: expression reduced to {remaining} terms instead of one")]
    Unreduced {
        /// How many terms were left.
        remaining: usize,
    },
}
