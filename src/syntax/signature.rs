//! Signature: function and predicate symbols with their arities.

use std::collections::BTreeMap;

use tracing::trace;

use crate::error::{LogicError, LogicResult};

/// Symbol table of a problem instance.
///
/// Constants are 0-ary function symbols. The signature is the only mutable
/// state shared across the pipeline: Skolemization registers new function
/// symbols and the Herbrand universe may draw fresh constants from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    functions: BTreeMap<String, usize>,
    predicates: BTreeMap<String, usize>,
    unique_constants: Vec<String>,
    next_constant: usize,
    next_function: usize,
}

impl Signature {
    /// Capacity of the fresh-constant pool.
    pub const UNIQUE_CONSTANT_POOL: usize = 100;

    pub fn new() -> Self {
        Signature {
            functions: BTreeMap::new(),
            predicates: BTreeMap::new(),
            unique_constants: (1..=Self::UNIQUE_CONSTANT_POOL)
                .map(|i| format!("uc{}", i))
                .collect(),
            next_constant: 0,
            next_function: 0,
        }
    }

    /// Register a function symbol. Re-registering overwrites the arity.
    pub fn add_function_symbol(&mut self, name: impl Into<String>, arity: usize) {
        self.functions.insert(name.into(), arity);
    }

    /// Register a predicate symbol. Re-registering overwrites the arity.
    pub fn add_predicate_symbol(&mut self, name: impl Into<String>, arity: usize) {
        self.predicates.insert(name.into(), arity);
    }

    pub fn check_function_symbol(&self, name: &str) -> Option<usize> {
        self.functions.get(name).copied()
    }

    pub fn check_predicate_symbol(&self, name: &str) -> Option<usize> {
        self.predicates.get(name).copied()
    }

    /// Arity of `name` if it is registered with exactly `found` operands.
    pub(crate) fn require_function(&self, name: &str, found: usize) -> LogicResult<usize> {
        match self.check_function_symbol(name) {
            Some(arity) if arity == found => Ok(arity),
            Some(arity) => Err(LogicError::arity(name, arity, found)),
            None => Err(LogicError::unknown_function(name)),
        }
    }

    pub(crate) fn require_predicate(&self, name: &str, found: usize) -> LogicResult<usize> {
        match self.check_predicate_symbol(name) {
            Some(arity) if arity == found => Ok(arity),
            Some(arity) => Err(LogicError::arity(name, arity, found)),
            None => Err(LogicError::unknown_predicate(name)),
        }
    }

    /// Mint a function symbol name (`uf<N>`) that is not registered and was
    /// never minted before. The caller registers it with the arity it needs.
    pub fn fresh_function_symbol(&mut self) -> String {
        loop {
            self.next_function += 1;
            let name = format!("uf{}", self.next_function);
            if !self.functions.contains_key(&name) && !self.predicates.contains_key(&name) {
                trace!(symbol = %name, "minted function symbol");
                return name;
            }
        }
    }

    /// Take the next unused constant from the pre-generated pool and register
    /// it with arity 0.
    pub fn fresh_constant(&mut self) -> LogicResult<String> {
        while let Some(name) = self.unique_constants.get(self.next_constant) {
            self.next_constant += 1;
            if self.functions.contains_key(name) {
                continue;
            }
            let name = name.clone();
            self.functions.insert(name.clone(), 0);
            trace!(constant = %name, "minted unique constant");
            return Ok(name);
        }
        Err(LogicError::ConstantPoolExhausted {
            capacity: Self::UNIQUE_CONSTANT_POOL,
        })
    }

    /// Registered function symbols in name order.
    pub fn functions(&self) -> impl Iterator<Item = (&str, usize)> {
        self.functions.iter().map(|(name, arity)| (name.as_str(), *arity))
    }

    /// Registered predicate symbols in name order.
    pub fn predicates(&self) -> impl Iterator<Item = (&str, usize)> {
        self.predicates.iter().map(|(name, arity)| (name.as_str(), *arity))
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::new()
    }
}
