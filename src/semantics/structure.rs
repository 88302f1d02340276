//! Interpretations of symbols over a finite domain.

use std::collections::BTreeMap;
use std::fmt;

use super::Domain;
use crate::error::{LogicError, LogicResult};
use crate::syntax::Signature;

/// Interpretation of a function symbol.
pub trait Function {
    fn arity(&self) -> usize;
    fn apply(&self, args: &[u32]) -> u32;
}

/// Interpretation of a predicate symbol.
pub trait Relation {
    fn arity(&self) -> usize;
    fn holds(&self, args: &[u32]) -> bool;
}

/// A [`Function`] backed by a closure.
pub struct FnFunction<F> {
    arity: usize,
    f: F,
}

impl<F> FnFunction<F>
where
    F: Fn(&[u32]) -> u32,
{
    pub fn new(arity: usize, f: F) -> Self {
        FnFunction { arity, f }
    }
}

impl<F> Function for FnFunction<F>
where
    F: Fn(&[u32]) -> u32,
{
    fn arity(&self) -> usize {
        self.arity
    }

    fn apply(&self, args: &[u32]) -> u32 {
        (self.f)(args)
    }
}

/// A [`Relation`] backed by a closure.
pub struct FnRelation<F> {
    arity: usize,
    f: F,
}

impl<F> FnRelation<F>
where
    F: Fn(&[u32]) -> bool,
{
    pub fn new(arity: usize, f: F) -> Self {
        FnRelation { arity, f }
    }
}

impl<F> Relation for FnRelation<F>
where
    F: Fn(&[u32]) -> bool,
{
    fn arity(&self) -> usize {
        self.arity
    }

    fn holds(&self, args: &[u32]) -> bool {
        (self.f)(args)
    }
}

/// A signature together with a domain and interpretations of its symbols.
///
/// Interpretations are checked against the signature when they are added.
pub struct Structure {
    signature: Signature,
    domain: Domain,
    functions: BTreeMap<String, Box<dyn Function>>,
    relations: BTreeMap<String, Box<dyn Relation>>,
}

impl Structure {
    pub fn new(signature: &Signature, domain: Domain) -> Self {
        Structure {
            signature: signature.clone(),
            domain,
            functions: BTreeMap::new(),
            relations: BTreeMap::new(),
        }
    }

    /// Interpret function symbol `name`. Replaces an earlier interpretation.
    pub fn add_function<F>(&mut self, name: impl Into<String>, function: F) -> LogicResult<()>
    where
        F: Function + 'static,
    {
        let name = name.into();
        self.signature.require_function(&name, function.arity())?;
        self.functions.insert(name, Box::new(function));
        Ok(())
    }

    /// Interpret predicate symbol `name`. Replaces an earlier interpretation.
    pub fn add_relation<R>(&mut self, name: impl Into<String>, relation: R) -> LogicResult<()>
    where
        R: Relation + 'static,
    {
        let name = name.into();
        self.signature.require_predicate(&name, relation.arity())?;
        self.relations.insert(name, Box::new(relation));
        Ok(())
    }

    pub fn function(&self, name: &str) -> LogicResult<&dyn Function> {
        self.functions
            .get(name)
            .map(|f| &**f)
            .ok_or_else(|| LogicError::unknown_function(name))
    }

    pub fn relation(&self, name: &str) -> LogicResult<&dyn Relation> {
        self.relations
            .get(name)
            .map(|r| &**r)
            .ok_or_else(|| LogicError::unknown_predicate(name))
    }

    pub fn domain(&self) -> &[u32] {
        &self.domain
    }
}

impl fmt::Debug for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Structure")
            .field("domain", &self.domain)
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .field("relations", &self.relations.keys().collect::<Vec<_>>())
            .finish()
    }
}
