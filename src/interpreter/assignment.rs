use tracing::debug;

use crate::{
    error::AssignmentError,
    interpreter::{store::VariableStore, token::Expression, tokenizer::tokenize},
};

/// A parsed `name = expression` line, not yet evaluated or stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The variable being assigned.
    pub name:       char,
    /// The tokenized right-hand side.
    pub expression: Expression,
}

/// Splits an assignment line into its variable name and expression.
///
/// The name is the first ASCII letter left of the first `=`; other characters
/// there are skipped. The right is tokenized against `store`, so it may
/// refer to variables assigned earlier, including the one being assigned.
/// Parsing never writes to `store`.
///
/// # Errors
/// Returns an [`AssignmentError`] if the line has no `=` or more than one, no
/// letter precedes the `=`, or the right-hand side is not a valid expression.
///
/// # Example
/// ```
/// use linecalc::{
///     error::AssignmentError,
///     interpreter::{assignment::parse_assignment, store::VariableStore},
/// };
///
/// let store = VariableStore::new();
/// let assignment = parse_assignment("x = 3+4", &store).unwrap();
/// assert_eq!(assignment.name, 'x');
/// assert_eq!(assignment.expression.len(), 3);
///
/// assert_eq!(parse_assignment("3y = 1", &store).unwrap().name, 'y');
///
/// assert_eq!(parse_assignment("x = 1 = 2", &store),
///            Err(AssignmentError::MultipleEquals));
/// ```
pub fn parse_assignment(line: &str, store: &VariableStore) -> Result<Assignment, AssignmentError> {
    let Some((target, source)) = line.split_once('=') else {
        return Err(AssignmentError::MissingEquals);
    };
    if source.contains('=') {
        return Err(AssignmentError::MultipleEquals);
    }

    let name = parse_name(target)?;
    let expression = tokenize(source, store)?;
    debug!(%name, %expression, "parsed assignment");

    Ok(Assignment { name, expression })
}

/// Finds the variable name left of `=`: its first letter. Anything else
/// before `=` is skipped.
fn parse_name(target: &str) -> Result<char, AssignmentError> {
    target.chars()
          .find(char::is_ascii_alphabetic)
          .ok_or(AssignmentError::MissingName)
}
