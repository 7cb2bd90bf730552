/// The assignment module parses `name = expression` lines.
///
/// It validates the variable name on the left of `=` and tokenizes the
/// expression on the right. Storing the result is left to the session, which
/// does so only after the expression has been evaluated.
pub mod assignment;
/// The evaluator module reduces token sequences to numbers.
///
/// Evaluation substitutes variables, resolves parenthesised groups
/// recursively, then collapses operators one precedence level at a time.
///
/// # Responsibilities
/// - Applies `^`, then `*` and `/`, then `+` and `-`, each left to right.
/// - Reports arithmetic faults such as division by zero.
/// - Bounds the nesting depth of parentheses.
pub mod evaluator;
/// The lexer module classifies the raw characters of a line.
pub mod lexer;
/// The session module ties tokenizing, evaluating and assigning together.
///
/// A session owns the variable table and processes one line at a time,
/// routing assignments and expressions and leaving the table untouched when a
/// line fails.
pub mod session;
/// The store module holds the variable table.
pub mod store;
/// Token and expression types shared by the tokenizer and the evaluator.
pub mod token;
/// The tokenizer module turns a line of text into an expression.
///
/// The tokenizer accumulates digits into numbers and resolves everything the
/// evaluator should not have to know about.
///
/// # Responsibilities
/// - Folds leading `-` signs into the following number and drops leading
///   `+` signs.
/// - Inserts implied multiplication between adjacent operands.
/// - Rejects unsupported characters, long operator runs and trailing
///   operators.
/// - Closes parentheses left open at the end of the line.
pub mod tokenizer;
