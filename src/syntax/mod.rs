//! Syntax of first-order logic: signatures, terms, formulas, literals and DNF clauses.

mod clause;
mod formula;
mod literal;
mod signature;
mod term;

pub use clause::{Clause, Dnf};
pub use formula::Formula;
pub use literal::{Atom, Literal};
pub use signature::Signature;
pub use term::{FnSym, Term, Var};
