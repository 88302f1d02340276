//! Gilmore's refutation procedure over growing Herbrand universes.

mod ground;
mod prover;

pub use ground::{ground_instances, surviving_clauses};
pub use prover::{gilmore, prove, prove_default, GilmoreConfig, ProofOutcome};
