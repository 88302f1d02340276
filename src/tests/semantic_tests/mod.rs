//! Semantic tests for the normalization pipeline and the Gilmore procedure.
//!
//! These check properties that hold across modules: substitution never
//! captures, every normalization stage preserves meaning in a finite
//! structure, and Herbrand growth stays duplicate-free.

use crate::semantics::{Even, FnFunction, LowerOrEqual, One, Plus, Structure, Valuation, Zero};
use crate::syntax::{Formula, Signature, Term, Var};

mod herbrand_semantics;
mod proptests;
mod substitution_semantics;

/// Constants `a`, `b`; functions `f/1`, `g/2`; predicates `p/1`, `r/2`.
fn test_signature() -> Signature {
    let mut sig = Signature::new();
    sig.add_function_symbol("a", 0);
    sig.add_function_symbol("b", 0);
    sig.add_function_symbol("f", 1);
    sig.add_function_symbol("g", 2);
    sig.add_predicate_symbol("p", 1);
    sig.add_predicate_symbol("r", 2);
    sig
}

/// Interpretation of [`test_signature`] over {0, 1, 2}.
fn test_structure() -> Structure {
    let mut s = Structure::new(&test_signature(), vec![0, 1, 2]);
    s.add_function("a", Zero).unwrap();
    s.add_function("b", One).unwrap();
    s.add_function("f", FnFunction::new(1, |args: &[u32]| (args[0] + 1) % 3))
        .unwrap();
    s.add_function("g", Plus::modulo(3)).unwrap();
    s.add_relation("p", Even).unwrap();
    s.add_relation("r", LowerOrEqual).unwrap();
    s
}

/// Valuation binding the free variables used by the generators.
fn test_valuation(structure: &Structure) -> Valuation {
    let mut val = Valuation::new(structure.domain());
    val.set(v("x"), 0).unwrap();
    val.set(v("y"), 1).unwrap();
    val.set(v("z"), 2).unwrap();
    val
}

fn v(name: &str) -> Var {
    Var::new(name)
}

fn a() -> Term {
    Term::constant(&test_signature(), "a").unwrap()
}

fn f(t: Term) -> Term {
    Term::app(&test_signature(), "f", vec![t]).unwrap()
}

fn g(l: Term, r: Term) -> Term {
    Term::app(&test_signature(), "g", vec![l, r]).unwrap()
}

fn p(t: Term) -> Formula {
    Formula::atom(&test_signature(), "p", vec![t]).unwrap()
}

fn r(l: Term, rt: Term) -> Formula {
    Formula::atom(&test_signature(), "r", vec![l, rt]).unwrap()
}

fn count_exists(formula: &Formula) -> usize {
    match formula {
        Formula::True | Formula::False | Formula::Atom(_) => 0,
        Formula::Not(inner) | Formula::Forall(_, inner) => count_exists(inner),
        Formula::Exists(_, inner) => 1 + count_exists(inner),
        Formula::And(l, rt) | Formula::Or(l, rt) | Formula::Imp(l, rt) | Formula::Iff(l, rt) => {
            count_exists(l) + count_exists(rt)
        }
    }
}
