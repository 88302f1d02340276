//! Assignments of domain values to variables.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{LogicError, LogicResult};
use crate::syntax::Var;

/// A partial map from variables to values of a fixed domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valuation {
    domain: BTreeSet<u32>,
    values: BTreeMap<Var, u32>,
}

impl Valuation {
    pub fn new(domain: &[u32]) -> Self {
        Valuation {
            domain: domain.iter().copied().collect(),
            values: BTreeMap::new(),
        }
    }

    /// Assign `value` to `var`, overwriting any earlier assignment.
    pub fn set(&mut self, var: Var, value: u32) -> LogicResult<()> {
        if !self.domain.contains(&value) {
            return Err(LogicError::ValueOutOfDomain { var, value });
        }
        self.values.insert(var, value);
        Ok(())
    }

    pub fn get(&self, var: &Var) -> LogicResult<u32> {
        self.values
            .get(var)
            .copied()
            .ok_or_else(|| LogicError::UnboundVariable { var: var.clone() })
    }

    pub fn is_bound(&self, var: &Var) -> bool {
        self.values.contains_key(var)
    }
}
