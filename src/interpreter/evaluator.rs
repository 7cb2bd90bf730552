/// Binary operator evaluation logic.
///
/// Applies a single operator to two numbers, with the division-by-zero and
/// overflow checks of each operator.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the [`Evaluator`](core::Evaluator), variable substitution and
/// parenthesis resolution.
pub mod core;

/// The collapse passes that apply one precedence level at a time.
pub mod reduce;
