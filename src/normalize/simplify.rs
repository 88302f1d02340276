//! Bottom-up constant folding.

use crate::syntax::Formula;

/// Fold `True`/`False` through the connectives and drop vacuous quantifiers.
pub fn simplify(formula: &Formula) -> Formula {
    match formula {
        Formula::True | Formula::False | Formula::Atom(_) => formula.clone(),
        Formula::Not(inner) => simplify_not(simplify(inner)),
        Formula::And(l, r) => match (simplify(l), simplify(r)) {
            (Formula::False, _) | (_, Formula::False) => Formula::False,
            (Formula::True, x) | (x, Formula::True) => x,
            (x, y) => Formula::and(x, y),
        },
        Formula::Or(l, r) => match (simplify(l), simplify(r)) {
            (Formula::True, _) | (_, Formula::True) => Formula::True,
            (Formula::False, x) | (x, Formula::False) => x,
            (x, y) => Formula::or(x, y),
        },
        Formula::Imp(l, r) => match (simplify(l), simplify(r)) {
            (Formula::False, _) | (_, Formula::True) => Formula::True,
            (Formula::True, x) => x,
            (x, Formula::False) => simplify_not(x),
            (x, y) => Formula::imp(x, y),
        },
        Formula::Iff(l, r) => match (simplify(l), simplify(r)) {
            (Formula::True, x) | (x, Formula::True) => x,
            (Formula::False, x) | (x, Formula::False) => simplify_not(x),
            (x, y) => Formula::iff(x, y),
        },
        Formula::Forall(v, body) => {
            let body = simplify(body);
            if body.contains_var(v, true) {
                Formula::forall(v.clone(), body)
            } else {
                body
            }
        }
        Formula::Exists(v, body) => {
            let body = simplify(body);
            if body.contains_var(v, true) {
                Formula::exists(v.clone(), body)
            } else {
                body
            }
        }
    }
}

fn simplify_not(inner: Formula) -> Formula {
    match inner {
        Formula::True => Formula::False,
        Formula::False => Formula::True,
        other => Formula::not(other),
    }
}
