//! Normalization pipeline from arbitrary formulas to ground-instance-ready matrices.
//!
//! The stages compose as `skolemize(prenex(nnf(f)))`, after which
//! [`strip_universal_prefix`] yields a quantifier-free matrix whose free
//! variables are implicitly universal. [`list_dnf`] turns a quantifier-free
//! formula into clauses. Every stage builds a new tree.

mod dnf;
mod nnf;
mod prenex;
mod simplify;
mod skolem;

pub use dnf::{list_dnf, make_pairs};
pub use nnf::nnf;
pub use prenex::{prenex, pull_quantifiers};
pub use simplify::simplify;
pub use skolem::{skolemize, skolemize_under, strip_universal_prefix};
