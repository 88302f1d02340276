//! Clauses of a disjunctive normal form: conjunctions of literals.

use std::collections::BTreeSet;
use std::fmt;

use super::literal::{Atom, Literal};
use super::Formula;

/// A DNF is a disjunction of clauses. No clauses is `False`; a single empty
/// clause is `True`.
pub type Dnf = Vec<Clause>;

/// One disjunct of a DNF: `L1 /\ L2 /\ ... /\ Ln`.
///
/// The empty clause is the empty conjunction, i.e. `True`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    pub literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause { literals }
    }

    pub fn empty() -> Self {
        Clause {
            literals: Vec::new(),
        }
    }

    pub fn unit(literal: Literal) -> Self {
        Clause {
            literals: vec![literal],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Concatenate the literals of two clauses.
    pub fn conjoin(&self, other: &Clause) -> Clause {
        let mut literals = Vec::with_capacity(self.len() + other.len());
        literals.extend(self.literals.iter().cloned());
        literals.extend(other.literals.iter().cloned());
        Clause { literals }
    }

    /// Scan the literals left to right, remembering positive and negative
    /// atoms seen so far; the clause is contradictory as soon as a literal's
    /// complement has already been seen.
    pub fn is_contradictory(&self) -> bool {
        let mut positives: BTreeSet<&Atom> = BTreeSet::new();
        let mut negatives: BTreeSet<&Atom> = BTreeSet::new();
        for lit in &self.literals {
            if lit.positive {
                if negatives.contains(&lit.atom) {
                    return true;
                }
                positives.insert(&lit.atom);
            } else {
                if positives.contains(&lit.atom) {
                    return true;
                }
                negatives.insert(&lit.atom);
            }
        }
        false
    }

    /// The clause as a right-nested conjunction (`True` when empty).
    pub fn to_formula(&self) -> Formula {
        Formula::conjoin_all(self.literals.iter().map(Literal::to_formula))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, "]")
    }
}
