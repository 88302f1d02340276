//! The bounded Gilmore loop.

use std::fmt;

use tracing::{debug, info};

use super::ground::{ground_instances, surviving_clauses};
use crate::error::LogicResult;
use crate::herbrand::HerbrandUniverse;
use crate::normalize::{nnf, prenex, skolemize, strip_universal_prefix};
use crate::subst::NameSupply;
use crate::syntax::{Formula, Signature, Var};

/// Configuration for the Gilmore loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GilmoreConfig {
    /// Number of Herbrand levels tried before giving up
    pub max_levels: usize,
}

impl GilmoreConfig {
    pub fn with_max_levels(mut self, max_levels: usize) -> Self {
        self.max_levels = max_levels;
        self
    }
}

impl Default for GilmoreConfig {
    fn default() -> Self {
        GilmoreConfig { max_levels: 5 }
    }
}

/// Result of a proof attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofOutcome {
    /// Every DNF clause of the ground conjunction was contradictory
    Unsat {
        /// Herbrand level (number of `next_level` calls) at which it happened
        level: usize,
        /// Number of ground instances conjoined
        instances: usize,
    },
    /// The level bound was exhausted. This is not a disproof.
    NotFound { levels: usize },
}

impl ProofOutcome {
    pub fn is_unsat(&self) -> bool {
        matches!(self, ProofOutcome::Unsat { .. })
    }
}

impl fmt::Display for ProofOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofOutcome::Unsat { .. } => write!(f, "UNSAT"),
            ProofOutcome::NotFound { .. } => write!(f, "Proof not found!"),
        }
    }
}

/// Try to show `formula` valid by refuting its negation.
///
/// Free variables are read universally: the universal closure is negated,
/// so they become existentials (Skolem constants) of the refuted formula.
pub fn prove(
    sig: &mut Signature,
    formula: &Formula,
    config: &GilmoreConfig,
) -> LogicResult<ProofOutcome> {
    gilmore(sig, &Formula::not(formula.generalize()), config)
}

pub fn prove_default(sig: &mut Signature, formula: &Formula) -> LogicResult<ProofOutcome> {
    prove(sig, formula, &GilmoreConfig::default())
}

/// Try to show `formula` unsatisfiable.
///
/// The formula is brought to Skolemized prenex form and its universal prefix
/// is stripped. At each Herbrand level the matrix is instantiated with every
/// assignment of universe terms to its free variables; if the conjunction of
/// the instances has no consistent DNF clause the formula is unsatisfiable.
/// Skolem symbols are registered in `sig`.
pub fn gilmore(
    sig: &mut Signature,
    formula: &Formula,
    config: &GilmoreConfig,
) -> LogicResult<ProofOutcome> {
    let mut names = NameSupply::new();
    let normal = nnf(formula);
    let prenexed = prenex(&normal, &mut names)?;
    let skolemized = skolemize(&prenexed, sig, &mut names)?;
    let matrix = strip_universal_prefix(&skolemized);
    let vars: Vec<Var> = matrix.free_variables().into_iter().collect();
    debug!(%matrix, vars = vars.len(), "ground matrix");

    let mut universe = HerbrandUniverse::new(sig, &matrix)?;
    for level in 0..config.max_levels {
        let instances = ground_instances(&matrix, &vars, &universe, &mut names);
        let survivors = surviving_clauses(&instances)?;
        if survivors.is_empty() {
            info!(depth = level, instances = instances.len(), "UNSAT");
            return Ok(ProofOutcome::Unsat {
                level,
                instances: instances.len(),
            });
        }
        debug!(depth = level, instances = instances.len(), survivors = survivors.len(), "satisfiable");
        if level + 1 < config.max_levels {
            universe.next_level();
            info!(depth = universe.depth(), universe = universe.len(), "Next level...");
        }
    }
    info!(levels = config.max_levels, "Proof not found!");
    Ok(ProofOutcome::NotFound {
        levels: config.max_levels,
    })
}
