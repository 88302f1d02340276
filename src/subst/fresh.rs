//! Fresh variable names for capture-avoiding renaming.

use tracing::trace;

use crate::syntax::{Formula, Term, Var};

/// Supplier of variables named `uv1`, `uv2`, ...
///
/// One supply is threaded through a whole proof attempt, so every variable
/// it hands out is distinct from every earlier one. A candidate that already
/// occurs in the terms or formulas being avoided is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSupply {
    counter: usize,
}

impl NameSupply {
    pub fn new() -> Self {
        NameSupply { counter: 0 }
    }

    /// A variable occurring neither in `term` nor (free or bound) in `formula`.
    pub fn fresh_variable(&mut self, term: &Term, formula: &Formula) -> Var {
        self.fresh_avoiding(&[term], &[formula])
    }

    /// A variable occurring in none of the given terms and formulas.
    pub fn fresh_avoiding(&mut self, terms: &[&Term], formulas: &[&Formula]) -> Var {
        loop {
            self.counter += 1;
            let candidate = Var::new(format!("uv{}", self.counter));
            let clashes = terms.iter().any(|t| t.contains_var(&candidate))
                || formulas.iter().any(|f| f.contains_var(&candidate, false));
            if !clashes {
                trace!(var = %candidate, "fresh variable");
                return candidate;
            }
        }
    }

    /// Number of candidate names consumed so far.
    pub fn issued(&self) -> usize {
        self.counter
    }
}
