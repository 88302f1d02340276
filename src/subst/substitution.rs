//! Substitution: mapping variables to terms.

use std::collections::BTreeMap;
use std::fmt;

use super::NameSupply;
use crate::syntax::{Formula, Term, Var};

/// A substitution {x1 -> t1, ..., xn -> tn}.
///
/// Bindings are kept in variable order so that applying the substitution to
/// a formula (one binding at a time) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    bindings: BTreeMap<Var, Term>,
}

impl Substitution {
    /// Create an empty substitution (identity).
    pub fn empty() -> Self {
        Substitution {
            bindings: BTreeMap::new(),
        }
    }

    /// Apply this substitution to a term, replacing all bound variables at once.
    pub fn apply_to_term(&self, term: &Term) -> Term {
        match term {
            Term::Var(var) => match self.bindings.get(var) {
                Some(t) => t.clone(),
                None => term.clone(),
            },
            Term::App(fn_sym, args) => {
                let new_args: Vec<Term> = args.iter().map(|arg| self.apply_to_term(arg)).collect();
                Term::App(fn_sym.clone(), new_args)
            }
        }
    }

    /// Apply this substitution to the free variables of a formula.
    ///
    /// Bindings are applied one after another in variable order, each one
    /// capture-avoiding. For ground ranges (the Herbrand case) this coincides
    /// with simultaneous substitution.
    pub fn apply_to_formula(&self, formula: &Formula, names: &mut NameSupply) -> Formula {
        self.bindings
            .iter()
            .fold(formula.clone(), |acc, (var, term)| acc.substitute(var, term, names))
    }

    /// Variables that are mapped, in order.
    pub fn domain(&self) -> impl Iterator<Item = &Var> {
        self.bindings.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// True if every binding maps to a ground term.
    pub fn is_ground(&self) -> bool {
        self.bindings.values().all(Term::is_ground)
    }
}

impl FromIterator<(Var, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Var, Term)>>(iter: I) -> Self {
        Substitution {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} -> {}", var, term)?;
        }
        write!(f, "}}")
    }
}
