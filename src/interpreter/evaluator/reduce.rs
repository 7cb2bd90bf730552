use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Term},
        token::Precedence,
    },
};

impl Evaluator<'_> {
    /// Collapses every operator of `level` into its value, left to right.
    ///
    /// On meeting an operator of `level`, the triple `left op right` is
    /// replaced by its result at once, and the scan steps back onto that
    /// result so it can combine with a following operator of the same level.
    /// Operators of other levels are passed over.
    pub(crate) fn collapse(mut terms: Vec<Term>, level: Precedence) -> EvalResult<Vec<Term>> {
        let mut i = 0;

        while i + 1 < terms.len() {
            let Term::Operator(op) = terms[i] else {
                i += 1;
                continue;
            };
            if op.precedence() != level {
                i += 1;
                continue;
            }

            let left = i.checked_sub(1).and_then(|j| terms.get(j));
            let (Some(&Term::Number(left)), Some(&Term::Number(right))) = (left, terms.get(i + 1))
            else {
                return Err(RuntimeError::MissingOperand { op: op.symbol() });
            };

            terms[i - 1] = Term::Number(Self::apply_operator(op, left, right)?);
            terms.drain(i..=i + 1);
            i -= 1;
        }

        Ok(terms)
    }
}
