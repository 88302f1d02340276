//! Substitutions and fresh-name generation.

mod fresh;
mod substitution;

pub use fresh::NameSupply;
pub use substitution::Substitution;
