//! Atoms and literals (signed atoms).

use std::collections::BTreeSet;
use std::fmt;

use super::term::{write_application, FnSym, Term, Var};
use super::{Formula, Signature};
use crate::error::LogicResult;

/// An atom (predicate application), e.g. `p(x, f(c))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom {
    pub predicate: String,
    pub args: Vec<Term>,
}

impl Atom {
    /// Create an atom, checking the predicate's arity.
    pub fn new(sig: &Signature, predicate: impl Into<String>, args: Vec<Term>) -> LogicResult<Self> {
        let predicate = predicate.into();
        sig.require_predicate(&predicate, args.len())?;
        Ok(Atom { predicate, args })
    }

    pub fn collect_vars(&self, vars: &mut BTreeSet<Var>) {
        for arg in &self.args {
            arg.collect_vars(vars);
        }
    }

    pub fn collect_constants(&self, constants: &mut BTreeSet<String>) {
        for arg in &self.args {
            arg.collect_constants(constants);
        }
    }

    pub fn collect_functions(&self, functions: &mut BTreeSet<FnSym>) {
        for arg in &self.args {
            arg.collect_functions(functions);
        }
    }

    pub fn is_ground(&self) -> bool {
        self.args.iter().all(Term::is_ground)
    }

    pub fn substitute(&self, var: &Var, term: &Term) -> Atom {
        Atom {
            predicate: self.predicate.clone(),
            args: self.args.iter().map(|a| a.substitute(var, term)).collect(),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_application(f, &self.predicate, &self.args)
    }
}

/// A literal is a signed atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// True if positive, false if negated
    pub positive: bool,
    /// The underlying atom
    pub atom: Atom,
}

impl Literal {
    pub fn positive(atom: Atom) -> Self {
        Literal {
            positive: true,
            atom,
        }
    }

    pub fn negative(atom: Atom) -> Self {
        Literal {
            positive: false,
            atom,
        }
    }

    /// Return the negation of this literal.
    pub fn negated(&self) -> Literal {
        Literal {
            positive: !self.positive,
            atom: self.atom.clone(),
        }
    }

    /// Same atom, opposite sign. Atoms are compared syntactically.
    pub fn is_complementary(&self, other: &Literal) -> bool {
        self.positive != other.positive && self.atom == other.atom
    }

    /// The literal as a formula: `Atom` or `Not(Atom)`.
    pub fn to_formula(&self) -> Formula {
        let atom = Formula::Atom(self.atom.clone());
        if self.positive {
            atom
        } else {
            Formula::not(atom)
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.atom)
        } else {
            write!(f, "~{}", self.atom)
        }
    }
}
