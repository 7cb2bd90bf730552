use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        store::VariableStore,
        token::{Operator, Precedence, Token},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on how deeply parentheses may nest.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A token after variable substitution.
///
/// Variables have no representation here, so no reduction pass can meet one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Term {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
}

/// Reduces token sequences to numbers.
///
/// An `Evaluator` borrows the variable table for the duration of one
/// evaluation. Reduction runs in a fixed order of passes, each consuming the
/// output of the previous one:
///
/// 1. every variable is replaced by its stored value,
/// 2. every top-level parenthesised group is evaluated recursively and
///    replaced by its value,
/// 3. `^` is collapsed from left to right,
/// 4. `*` and `/` are collapsed from left to right in the order they appear,
/// 5. `+` and `-` are collapsed from left to right in the order they appear.
///
/// Collapsing left to right makes `^` left-associative: `2^3^2` is `64`.
///
/// # Example
/// ```
/// use linecalc::interpreter::{
///     evaluator::core::Evaluator,
///     store::VariableStore,
///     token::{Operator, Token},
/// };
///
/// let store = VariableStore::new();
/// let tokens = [Token::Number(12.0),
///               Token::Operator(Operator::Add),
///               Token::Number(-6.0),
///               Token::Operator(Operator::Div),
///               Token::Number(5.0)];
///
/// let value = Evaluator::new(&store).evaluate(&tokens).unwrap();
/// assert!((value - 10.8).abs() < 1e-12);
/// ```
pub struct Evaluator<'a> {
    store:     &'a VariableStore,
    max_depth: usize,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator reading variables from `store`, with the default
    /// nesting limit.
    #[must_use]
    pub const fn new(store: &'a VariableStore) -> Self {
        Self { store,
               max_depth: MAX_NESTING_DEPTH }
    }

    /// Sets how many levels of parentheses may be nested.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Evaluates a token sequence and returns its value.
    ///
    /// # Parameters
    /// - `tokens`: The sequence to reduce, usually a tokenized
    ///   [`Expression`](crate::interpreter::token::Expression).
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] when a divisor is zero and
    /// [`RuntimeError::NestingTooDeep`] when parentheses nest deeper than the
    /// limit. Malformed sequences that the tokenizer never produces, such as
    /// an operator without operands or an unknown variable, are reported as
    /// internal errors.
    pub fn evaluate(&self, tokens: &[Token]) -> EvalResult<f64> {
        let terms = self.substitute(tokens)?;
        let value = self.reduce(&terms, 0)?;
        debug!(value, "evaluated expression");
        Ok(value)
    }

    fn substitute(&self, tokens: &[Token]) -> EvalResult<Vec<Term>> {
        tokens.iter()
              .map(|token| match *token {
                  Token::Number(value) => Ok(Term::Number(value)),
                  Token::Operator(op) => Ok(Term::Operator(op)),
                  Token::LeftParen => Ok(Term::LeftParen),
                  Token::RightParen => Ok(Term::RightParen),
                  Token::Variable(name) => self.store
                                               .get(name)
                                               .map(Term::Number)
                                               .ok_or(RuntimeError::UnknownVariable { name }),
              })
              .collect()
    }

    /// Runs the group, power, product and sum passes over `terms`.
    fn reduce(&self, terms: &[Term], depth: usize) -> EvalResult<f64> {
        if depth > self.max_depth {
            return Err(RuntimeError::NestingTooDeep { limit: self.max_depth });
        }

        let mut terms = self.resolve_groups(terms, depth)?;
        for level in Precedence::ALL {
            terms = Self::collapse(terms, level)?;
            trace!(?level, ?terms, depth, "collapsed");
        }

        match terms.as_slice() {
            [Term::Number(value)] => Ok(*value),
            _ => Err(RuntimeError::Unreduced { remaining: terms.len() }),
        }
    }

    /// Replaces each outermost parenthesised group by its value.
    ///
    /// Nested groups are left to the recursive call on the group's contents.
    fn resolve_groups(&self, terms: &[Term], depth: usize) -> EvalResult<Vec<Term>> {
        let mut resolved = Vec::with_capacity(terms.len());
        let mut hanging = 0_usize;
        let mut open_index = 0;

        for (i, term) in terms.iter().enumerate() {
            match term {
                Term::LeftParen => {
                    if hanging == 0 {
                        open_index = i;
                    }
                    hanging += 1;
                },
                Term::RightParen => {
                    hanging = hanging.checked_sub(1).ok_or(RuntimeError::UnbalancedGroup)?;
                    if hanging == 0 {
                        let inner = &terms[open_index + 1..i];
                        resolved.push(Term::Number(self.reduce(inner, depth + 1)?));
                    }
                },
                _ if hanging == 0 => resolved.push(*term),
                _ => {},
            }
        }

        if hanging != 0 {
            return Err(RuntimeError::UnbalancedGroup);
        }
        Ok(resolved)
    }
}

/// Evaluates `tokens` against `store` with the default nesting limit.
///
/// # Errors
/// See [`Evaluator::evaluate`].
///
/// # Example
/// ```
/// use linecalc::{
///     error::RuntimeError,
///     interpreter::{
///         evaluator::core::evaluate,
///         store::VariableStore,
///         token::{Operator, Token},
///     },
/// };
///
/// let store = VariableStore::new();
/// let tokens = [Token::Number(12.0), Token::Operator(Operator::Div), Token::Number(0.0)];
/// assert_eq!(evaluate(&tokens, &store), Err(RuntimeError::DivisionByZero));
/// ```
pub fn evaluate(tokens: &[Token], store: &VariableStore) -> EvalResult<f64> {
    Evaluator::new(store).evaluate(tokens)
}
