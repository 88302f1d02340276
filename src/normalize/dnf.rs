//! Disjunctive normal form as a list of clauses.

use itertools::iproduct;

use crate::error::{LogicError, LogicResult};
use crate::syntax::{Clause, Dnf, Formula, Literal};

/// DNF of a quantifier-free formula without `Imp`/`Iff`.
///
/// `True` is one empty clause, `False` is no clauses. `And` distributes via
/// [`make_pairs`]; `Or` concatenates. No clause is dropped or merged here.
pub fn list_dnf(formula: &Formula) -> LogicResult<Dnf> {
    match formula {
        Formula::True => Ok(vec![Clause::empty()]),
        Formula::False => Ok(Vec::new()),
        Formula::Atom(atom) => Ok(vec![Clause::unit(Literal::positive(atom.clone()))]),
        Formula::Not(inner) => match inner.as_ref() {
            Formula::Atom(atom) => Ok(vec![Clause::unit(Literal::negative(atom.clone()))]),
            Formula::True => Ok(Vec::new()),
            Formula::False => Ok(vec![Clause::empty()]),
            other => Err(LogicError::misuse("list_dnf", format!("negated {}", other.kind_name()))),
        },
        Formula::And(l, r) => Ok(make_pairs(&list_dnf(l)?, &list_dnf(r)?)),
        Formula::Or(l, r) => {
            let mut clauses = list_dnf(l)?;
            clauses.extend(list_dnf(r)?);
            Ok(clauses)
        }
        Formula::Imp(_, _) | Formula::Iff(_, _) | Formula::Forall(_, _) | Formula::Exists(_, _) => {
            Err(LogicError::misuse("list_dnf", formula.kind_name()))
        }
    }
}

/// Every clause of `left` conjoined with every clause of `right`, left-major.
pub fn make_pairs(left: &[Clause], right: &[Clause]) -> Dnf {
    iproduct!(left, right).map(|(l, r)| l.conjoin(r)).collect()
}
