//! Evaluation of terms and formulas in a finite structure.

use super::{Structure, Valuation};
use crate::error::{LogicError, LogicResult};
use crate::syntax::{Formula, Term, Var};

impl Term {
    /// Value of the term under `valuation`.
    pub fn eval(&self, structure: &Structure, valuation: &Valuation) -> LogicResult<u32> {
        match self {
            Term::Var(v) => valuation.get(v),
            Term::App(sym, args) => {
                let function = structure.function(&sym.name)?;
                if function.arity() != args.len() {
                    return Err(LogicError::arity(&sym.name, function.arity(), args.len()));
                }
                let values = args
                    .iter()
                    .map(|arg| arg.eval(structure, valuation))
                    .collect::<LogicResult<Vec<u32>>>()?;
                Ok(function.apply(&values))
            }
        }
    }
}

impl Formula {
    /// Truth value of the formula under `valuation`.
    ///
    /// Quantifiers iterate the structure's domain in order and stop at the
    /// first witness (`Exists`) or counterexample (`Forall`).
    pub fn eval(&self, structure: &Structure, valuation: &Valuation) -> LogicResult<bool> {
        match self {
            Formula::True => Ok(true),
            Formula::False => Ok(false),
            Formula::Atom(atom) => {
                let relation = structure.relation(&atom.predicate)?;
                if relation.arity() != atom.args.len() {
                    return Err(LogicError::arity(
                        &atom.predicate,
                        relation.arity(),
                        atom.args.len(),
                    ));
                }
                let values = atom
                    .args
                    .iter()
                    .map(|arg| arg.eval(structure, valuation))
                    .collect::<LogicResult<Vec<u32>>>()?;
                Ok(relation.holds(&values))
            }
            Formula::Not(inner) => Ok(!inner.eval(structure, valuation)?),
            Formula::And(l, r) => Ok(l.eval(structure, valuation)? && r.eval(structure, valuation)?),
            Formula::Or(l, r) => Ok(l.eval(structure, valuation)? || r.eval(structure, valuation)?),
            Formula::Imp(l, r) => Ok(!l.eval(structure, valuation)? || r.eval(structure, valuation)?),
            Formula::Iff(l, r) => Ok(l.eval(structure, valuation)? == r.eval(structure, valuation)?),
            Formula::Forall(v, body) => {
                for value in structure.domain() {
                    if !body.eval(structure, &rebind(valuation, v, *value)?)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Formula::Exists(v, body) => {
                for value in structure.domain() {
                    if body.eval(structure, &rebind(valuation, v, *value)?)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}

fn rebind(valuation: &Valuation, var: &Var, value: u32) -> LogicResult<Valuation> {
    let mut inner = valuation.clone();
    inner.set(var.clone(), value)?;
    Ok(inner)
}
