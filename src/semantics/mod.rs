//! Finite-domain semantics: structures, valuations and evaluation.
//!
//! A [`Structure`] interprets the function and predicate symbols of a
//! [`Signature`](crate::syntax::Signature) over a finite [`Domain`] of
//! natural numbers. Terms and formulas are evaluated under a [`Valuation`];
//! quantifiers range over the whole domain.

mod arith;
mod eval;
mod structure;
mod valuation;

pub use arith::{Equal, Even, LowerOrEqual, Odd, One, Plus, Times, Zero};
pub use structure::{FnFunction, FnRelation, Function, Relation, Structure};
pub use valuation::Valuation;

/// The carrier of a structure: distinct values, in iteration order.
pub type Domain = Vec<u32>;
