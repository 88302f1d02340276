//! Skolemization of prenex formulas.

use tracing::debug;

use crate::error::{LogicError, LogicResult};
use crate::subst::NameSupply;
use crate::syntax::{FnSym, Formula, Signature, Term, Var};

/// Replace every existential of a prenex formula by a Skolem term.
///
/// Each `Exists y` gets a fresh function symbol from `sig`, registered with
/// arity equal to the number of universals above it, and `y` is replaced by
/// that symbol applied to those universals. The result has only leading
/// universal quantifiers. A non-prenex input fails with `StageMisuse`.
pub fn skolemize(
    formula: &Formula,
    sig: &mut Signature,
    names: &mut NameSupply,
) -> LogicResult<Formula> {
    skolemize_under(formula, sig, &[], names)
}

/// Skolemize as if `formula` sat below universal quantifiers on `universals`.
pub fn skolemize_under(
    formula: &Formula,
    sig: &mut Signature,
    universals: &[Var],
    names: &mut NameSupply,
) -> LogicResult<Formula> {
    let mut universals = universals.to_vec();
    let result = skolemize_rec(formula, sig, &mut universals, names)?;
    debug!(%result, "skolemized");
    Ok(result)
}

fn skolemize_rec(
    formula: &Formula,
    sig: &mut Signature,
    universals: &mut Vec<Var>,
    names: &mut NameSupply,
) -> LogicResult<Formula> {
    match formula {
        Formula::Forall(x, body) => {
            universals.push(x.clone());
            let body = skolemize_rec(body, sig, universals, names)?;
            Ok(Formula::forall(x.clone(), body))
        }
        Formula::Exists(y, body) => {
            let name = sig.fresh_function_symbol();
            let arity = universals.len();
            sig.add_function_symbol(name.clone(), arity);
            let witness = Term::App(
                FnSym::new(name, arity),
                universals.iter().cloned().map(Term::Var).collect(),
            );
            debug!(var = %y, term = %witness, "skolem term");
            let body = body.substitute(y, &witness, names);
            skolemize_rec(&body, sig, universals, names)
        }
        other if other.is_quantifier_free() => Ok(other.clone()),
        other => Err(LogicError::misuse("skolemize", format!("{} below a connective", other.kind_name()))),
    }
}

/// Drop the leading `Forall` quantifiers, leaving their variables free.
pub fn strip_universal_prefix(formula: &Formula) -> Formula {
    let mut current = formula;
    while let Formula::Forall(_, body) = current {
        current = &**body;
    }
    current.clone()
}
