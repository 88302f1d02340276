//! Ground instantiation and propositional contradiction search.

use indexmap::IndexSet;
use itertools::{iproduct, Itertools};

use crate::error::LogicResult;
use crate::herbrand::HerbrandUniverse;
use crate::normalize::list_dnf;
use crate::subst::{NameSupply, Substitution};
use crate::syntax::{Clause, Dnf, Formula, Var};

/// One instance of `matrix` per assignment of universe terms to `vars`.
///
/// Assignments are enumerated lexicographically over `vars` in the given
/// order. With no variables the matrix itself is the only instance.
pub fn ground_instances(
    matrix: &Formula,
    vars: &[Var],
    universe: &HerbrandUniverse,
    names: &mut NameSupply,
) -> Vec<Formula> {
    if vars.is_empty() {
        return vec![matrix.clone()];
    }
    vars.iter()
        .map(|_| universe.level().iter().cloned())
        .multi_cartesian_product()
        .map(|terms| {
            let assignment: Substitution = vars.iter().cloned().zip(terms).collect();
            assignment.apply_to_formula(matrix, names)
        })
        .collect()
}

/// DNF clauses of the conjunction of `instances` that are not contradictory.
///
/// Equivalent to taking the full DNF and discarding every clause holding a
/// complementary pair, but computed conjunct by conjunct: a contradictory
/// partial clause stays contradictory under any extension, so it is dropped
/// at once. Clauses are kept with sorted, duplicate-free literals. An empty
/// result means the conjunction is unsatisfiable.
pub fn surviving_clauses(instances: &[Formula]) -> LogicResult<Dnf> {
    let conjuncts: IndexSet<&Formula> = instances.iter().flat_map(Formula::conjuncts).collect();
    let mut parts: Vec<Dnf> = conjuncts
        .into_iter()
        .map(list_dnf)
        .collect::<LogicResult<_>>()?;
    parts.sort_by_key(Vec::len);

    let mut survivors: Dnf = vec![Clause::empty()];
    for part in &parts {
        survivors = conjoin_pruned(&survivors, part);
        if survivors.is_empty() {
            break;
        }
    }
    Ok(survivors)
}

fn conjoin_pruned(left: &[Clause], right: &[Clause]) -> Dnf {
    let merged: IndexSet<Clause> = iproduct!(left, right)
        .map(|(l, r)| merge(l, r))
        .filter(|clause| !clause.is_contradictory())
        .collect();
    merged.into_iter().collect()
}

fn merge(left: &Clause, right: &Clause) -> Clause {
    let mut literals = left.conjoin(right).literals;
    literals.sort();
    literals.dedup();
    Clause::new(literals)
}
