//! Negation normal form.

use crate::syntax::Formula;

/// Push negations down to the atoms and eliminate `Imp`/`Iff`.
///
/// `Iff(A, B)` becomes `(~A \/ B) /\ (~B \/ A)`, so both operands appear
/// twice in the output.
pub fn nnf(formula: &Formula) -> Formula {
    match formula {
        Formula::True | Formula::False | Formula::Atom(_) => formula.clone(),
        Formula::Not(inner) => nnf_negated(inner),
        Formula::And(l, r) => Formula::and(nnf(l), nnf(r)),
        Formula::Or(l, r) => Formula::or(nnf(l), nnf(r)),
        Formula::Imp(l, r) => Formula::or(nnf_negated(l), nnf(r)),
        Formula::Iff(l, r) => Formula::and(
            Formula::or(nnf_negated(l), nnf(r)),
            Formula::or(nnf_negated(r), nnf(l)),
        ),
        Formula::Forall(v, body) => Formula::forall(v.clone(), nnf(body)),
        Formula::Exists(v, body) => Formula::exists(v.clone(), nnf(body)),
    }
}

/// NNF of `Not(formula)`.
fn nnf_negated(formula: &Formula) -> Formula {
    match formula {
        Formula::True => Formula::False,
        Formula::False => Formula::True,
        Formula::Atom(_) => Formula::not(formula.clone()),
        Formula::Not(inner) => nnf(inner),
        Formula::And(l, r) => Formula::or(nnf_negated(l), nnf_negated(r)),
        Formula::Or(l, r) => Formula::and(nnf_negated(l), nnf_negated(r)),
        Formula::Imp(l, r) => Formula::and(nnf(l), nnf_negated(r)),
        Formula::Iff(l, r) => Formula::or(
            Formula::and(nnf(l), nnf_negated(r)),
            Formula::and(nnf(r), nnf_negated(l)),
        ),
        Formula::Forall(v, body) => Formula::exists(v.clone(), nnf_negated(body)),
        Formula::Exists(v, body) => Formula::forall(v.clone(), nnf_negated(body)),
    }
}
