//! Gilmore: a small first-order logic engine.
//!
//! This crate represents first-order terms and formulas, normalizes formulas
//! (simplification, negation normal form, prenex form, Skolemization),
//! enumerates Herbrand universes and runs Gilmore's procedure to certify
//! validity by refuting a ground instantiation of the negated formula. A
//! finite-domain evaluator checks formulas against concrete structures.

pub mod error;
pub mod gilmore;
pub mod herbrand;
pub mod normalize;
pub mod semantics;
pub mod subst;
pub mod syntax;

pub use error::{LogicError, LogicResult};

#[cfg(test)]
mod tests;
