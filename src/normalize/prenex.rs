//! Prenex normal form by pulling quantifiers out of `And`/`Or`.
//!
//! Existentials are pulled before universals, so in the resulting prefix an
//! existential never ends up below a universal it could have been placed
//! above. After Skolemization this yields constants rather than functions
//! wherever the input allows it, which keeps the Herbrand universe small.

use tracing::debug;

use crate::error::{LogicError, LogicResult};
use crate::subst::NameSupply;
use crate::syntax::{Formula, Term, Var};

type Quantifier = fn(Var, Formula) -> Formula;
type Connective = fn(Formula, Formula) -> Formula;

/// Prenex form of an NNF formula.
///
/// Fails with `StageMisuse` on `Imp`/`Iff`, or on a negation whose operand
/// still contains a quantifier.
pub fn prenex(formula: &Formula, names: &mut NameSupply) -> LogicResult<Formula> {
    let result = prenex_rec(formula, names)?;
    debug!(%result, "prenex");
    Ok(result)
}

fn prenex_rec(formula: &Formula, names: &mut NameSupply) -> LogicResult<Formula> {
    match formula {
        Formula::Forall(v, body) => Ok(Formula::forall(v.clone(), prenex_rec(body, names)?)),
        Formula::Exists(v, body) => Ok(Formula::exists(v.clone(), prenex_rec(body, names)?)),
        Formula::And(l, r) => {
            let joined = Formula::and(prenex_rec(l, names)?, prenex_rec(r, names)?);
            pull_quantifiers(&joined, names)
        }
        Formula::Or(l, r) => {
            let joined = Formula::or(prenex_rec(l, names)?, prenex_rec(r, names)?);
            pull_quantifiers(&joined, names)
        }
        Formula::Imp(_, _) | Formula::Iff(_, _) => {
            Err(LogicError::misuse("prenex", formula.kind_name()))
        }
        Formula::Not(inner) if !inner.is_quantifier_free() => {
            Err(LogicError::misuse("prenex", "negated quantifier"))
        }
        Formula::True | Formula::False | Formula::Atom(_) | Formula::Not(_) => Ok(formula.clone()),
    }
}

/// Pull the leading quantifiers of both (already prenex) operands of an
/// `And`/`Or` outward through the connective.
///
/// Any other formula is returned unchanged, except `Imp`/`Iff`, which are
/// rejected.
pub fn pull_quantifiers(formula: &Formula, names: &mut NameSupply) -> LogicResult<Formula> {
    match formula {
        Formula::And(l, r) => match (l.as_ref(), r.as_ref()) {
            (Formula::Exists(x, a), other) => pull_left(Formula::exists, Formula::and, x, a, other, names),
            (other, Formula::Exists(y, b)) => pull_right(Formula::exists, Formula::and, other, y, b, names),
            (Formula::Forall(x, a), Formula::Forall(y, b)) => {
                pull_both(Formula::forall, Formula::and, x, a, y, b, names)
            }
            (Formula::Forall(x, a), other) => pull_left(Formula::forall, Formula::and, x, a, other, names),
            (other, Formula::Forall(y, b)) => pull_right(Formula::forall, Formula::and, other, y, b, names),
            _ => Ok(formula.clone()),
        },
        Formula::Or(l, r) => match (l.as_ref(), r.as_ref()) {
            (Formula::Exists(x, a), Formula::Exists(y, b)) => {
                pull_both(Formula::exists, Formula::or, x, a, y, b, names)
            }
            (Formula::Exists(x, a), other) => pull_left(Formula::exists, Formula::or, x, a, other, names),
            (other, Formula::Exists(y, b)) => pull_right(Formula::exists, Formula::or, other, y, b, names),
            (Formula::Forall(x, a), other) => pull_left(Formula::forall, Formula::or, x, a, other, names),
            (other, Formula::Forall(y, b)) => pull_right(Formula::forall, Formula::or, other, y, b, names),
            _ => Ok(formula.clone()),
        },
        Formula::Imp(_, _) | Formula::Iff(_, _) => {
            Err(LogicError::misuse("pull_quantifiers", formula.kind_name()))
        }
        _ => Ok(formula.clone()),
    }
}

/// `(Q x. a) op other` becomes `Q x'. (a' op other)`, renaming `x` when it is
/// free in `other`.
fn pull_left(
    quantifier: Quantifier,
    connective: Connective,
    x: &Var,
    a: &Formula,
    other: &Formula,
    names: &mut NameSupply,
) -> LogicResult<Formula> {
    let (var, body) = rename_if_free_in(x, a, other, names);
    let inner = pull_quantifiers(&connective(body, other.clone()), names)?;
    Ok(quantifier(var, inner))
}

fn pull_right(
    quantifier: Quantifier,
    connective: Connective,
    other: &Formula,
    y: &Var,
    b: &Formula,
    names: &mut NameSupply,
) -> LogicResult<Formula> {
    let (var, body) = rename_if_free_in(y, b, other, names);
    let inner = pull_quantifiers(&connective(other.clone(), body), names)?;
    Ok(quantifier(var, inner))
}

/// Merge two like quantifiers into one. Different bound variables are both
/// renamed to a single fresh variable.
#[allow(clippy::too_many_arguments)]
fn pull_both(
    quantifier: Quantifier,
    connective: Connective,
    x: &Var,
    a: &Formula,
    y: &Var,
    b: &Formula,
    names: &mut NameSupply,
) -> LogicResult<Formula> {
    if x == y {
        let inner = pull_quantifiers(&connective(a.clone(), b.clone()), names)?;
        return Ok(quantifier(x.clone(), inner));
    }
    let z = names.fresh_avoiding(&[], &[a, b]);
    let zt = Term::Var(z.clone());
    let a = a.substitute(x, &zt, names);
    let b = b.substitute(y, &zt, names);
    let inner = pull_quantifiers(&connective(a, b), names)?;
    Ok(quantifier(z, inner))
}

fn rename_if_free_in(
    var: &Var,
    body: &Formula,
    other: &Formula,
    names: &mut NameSupply,
) -> (Var, Formula) {
    if !other.contains_var(var, true) {
        return (var.clone(), body.clone());
    }
    let fresh = names.fresh_avoiding(&[], &[body, other]);
    let renamed = body.substitute(var, &Term::Var(fresh.clone()), names);
    (fresh, renamed)
}
