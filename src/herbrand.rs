//! Level-wise enumeration of the Herbrand universe of a formula.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexSet;
use itertools::Itertools;
use tracing::trace;

use crate::error::LogicResult;
use crate::syntax::{FnSym, Formula, Signature, Term};

/// Ground terms built from the constants and function symbols of a formula.
///
/// Level 0 holds the formula's constants, or one fresh constant if it has
/// none. Each [`next_level`](Self::next_level) applies every function symbol
/// to every tuple of current terms. Terms are kept in insertion order and
/// never duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HerbrandUniverse {
    functions: BTreeSet<FnSym>,
    level: IndexSet<Term>,
    depth: usize,
}

impl HerbrandUniverse {
    /// Seed the universe from `formula`, drawing a fresh constant from `sig`
    /// when the formula mentions none.
    pub fn new(sig: &mut Signature, formula: &Formula) -> LogicResult<Self> {
        let mut level: IndexSet<Term> = formula
            .constants()
            .into_iter()
            .map(|name| Term::App(FnSym::new(name, 0), Vec::new()))
            .collect();
        if level.is_empty() {
            let name = sig.fresh_constant()?;
            level.insert(Term::App(FnSym::new(name, 0), Vec::new()));
        }
        let functions = formula.functions();
        trace!(constants = level.len(), functions = functions.len(), "herbrand universe seeded");
        Ok(HerbrandUniverse {
            functions,
            level,
            depth: 0,
        })
    }

    /// Grow by one level; returns how many terms were added.
    ///
    /// Tuples are drawn with repetition from a snapshot of the current level,
    /// so terms added in this call are not reused until the next one.
    pub fn next_level(&mut self) -> usize {
        let snapshot: Vec<Term> = self.level.iter().cloned().collect();
        let before = self.level.len();
        for sym in &self.functions {
            for args in tuples(&snapshot, sym.arity) {
                self.level.insert(Term::App(sym.clone(), args));
            }
        }
        self.depth += 1;
        let added = self.level.len() - before;
        trace!(depth = self.depth, added, size = self.level.len(), "herbrand level");
        added
    }

    /// Current terms in insertion order.
    pub fn level(&self) -> &IndexSet<Term> {
        &self.level
    }

    /// Function symbols (arity >= 1) used for growth.
    pub fn functions(&self) -> &BTreeSet<FnSym> {
        &self.functions
    }

    /// Number of `next_level` calls so far.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.level.len()
    }

    pub fn is_empty(&self) -> bool {
        self.level.is_empty()
    }

    pub fn contains(&self, term: &Term) -> bool {
        self.level.contains(term)
    }
}

/// All `k`-tuples over `items`, with repetition, in lexicographic order.
pub(crate) fn tuples(items: &[Term], k: usize) -> Vec<Vec<Term>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    (0..k)
        .map(|_| items.iter().cloned())
        .multi_cartesian_product()
        .collect()
}

impl fmt::Display for HerbrandUniverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.level.iter().join(", "))
    }
}
