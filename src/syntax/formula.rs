//! First-order formulas and their structural operations.

use std::collections::BTreeSet;
use std::fmt;

use super::literal::Atom;
use super::term::{FnSym, Term, Var};
use super::Signature;
use crate::error::LogicResult;
use crate::subst::NameSupply;

/// A first-order formula.
///
/// Formulas are immutable trees; every transformation builds a new tree.
/// Equality is structural (bound variable names included).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    True,
    False,
    Atom(Atom),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Imp(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
    Forall(Var, Box<Formula>),
    Exists(Var, Box<Formula>),
}

impl Formula {
    /// Atomic formula, checking the predicate's arity.
    pub fn atom(sig: &Signature, predicate: impl Into<String>, args: Vec<Term>) -> LogicResult<Self> {
        Ok(Formula::Atom(Atom::new(sig, predicate, args)?))
    }

    pub fn not(inner: Formula) -> Self {
        Formula::Not(Box::new(inner))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn imp(left: Formula, right: Formula) -> Self {
        Formula::Imp(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    pub fn forall(var: Var, body: Formula) -> Self {
        Formula::Forall(var, Box::new(body))
    }

    pub fn exists(var: Var, body: Formula) -> Self {
        Formula::Exists(var, Box::new(body))
    }

    /// Right-nested conjunction of the given formulas; `True` if there are none.
    pub fn conjoin_all<I>(formulas: I) -> Formula
    where
        I: IntoIterator<Item = Formula>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut iter = formulas.into_iter().rev();
        match iter.next() {
            None => Formula::True,
            Some(last) => iter.fold(last, |acc, f| Formula::and(f, acc)),
        }
    }

    /// Name of the outermost connective, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Formula::True => "True",
            Formula::False => "False",
            Formula::Atom(_) => "atom",
            Formula::Not(_) => "negation",
            Formula::And(_, _) => "conjunction",
            Formula::Or(_, _) => "disjunction",
            Formula::Imp(_, _) => "implication",
            Formula::Iff(_, _) => "equivalence",
            Formula::Forall(_, _) => "universal quantifier",
            Formula::Exists(_, _) => "existential quantifier",
        }
    }

    /// Top-level conjuncts, flattening nested `And` nodes left to right.
    pub fn conjuncts(&self) -> Vec<&Formula> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(f) = stack.pop() {
            match f {
                Formula::And(l, r) => {
                    stack.push(r);
                    stack.push(l);
                }
                other => out.push(other),
            }
        }
        out
    }

    /// Accumulate variables into `vars`.
    ///
    /// With `free == false` every variable is collected, binders included.
    /// With `free == true` a quantifier's variable is removed after visiting
    /// its body unless it was already in the set beforehand, i.e. free from
    /// an earlier, unrelated occurrence.
    pub fn collect_vars(&self, vars: &mut BTreeSet<Var>, free: bool) {
        match self {
            Formula::True | Formula::False => {}
            Formula::Atom(atom) => atom.collect_vars(vars),
            Formula::Not(inner) => inner.collect_vars(vars, free),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Imp(l, r) | Formula::Iff(l, r) => {
                l.collect_vars(vars, free);
                r.collect_vars(vars, free);
            }
            Formula::Forall(v, body) | Formula::Exists(v, body) => {
                if free {
                    let present = vars.contains(v);
                    body.collect_vars(vars, free);
                    if !present {
                        vars.remove(v);
                    }
                } else {
                    body.collect_vars(vars, free);
                    vars.insert(v.clone());
                }
            }
        }
    }

    /// Every variable, free or bound.
    pub fn variables(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars, false);
        vars
    }

    pub fn free_variables(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars, true);
        vars
    }

    /// Universal closure: `(A x1)...(A xn).F` over the free variables, in
    /// name order with the first outermost.
    pub fn generalize(&self) -> Formula {
        self.free_variables()
            .into_iter()
            .rev()
            .fold(self.clone(), |body, var| Formula::forall(var, body))
    }

    pub fn contains_var(&self, var: &Var, free: bool) -> bool {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars, free);
        vars.contains(var)
    }

    pub fn collect_constants(&self, constants: &mut BTreeSet<String>) {
        match self {
            Formula::True | Formula::False => {}
            Formula::Atom(atom) => atom.collect_constants(constants),
            Formula::Not(inner) | Formula::Forall(_, inner) | Formula::Exists(_, inner) => {
                inner.collect_constants(constants)
            }
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Imp(l, r) | Formula::Iff(l, r) => {
                l.collect_constants(constants);
                r.collect_constants(constants);
            }
        }
    }

    pub fn collect_functions(&self, functions: &mut BTreeSet<FnSym>) {
        match self {
            Formula::True | Formula::False => {}
            Formula::Atom(atom) => atom.collect_functions(functions),
            Formula::Not(inner) | Formula::Forall(_, inner) | Formula::Exists(_, inner) => {
                inner.collect_functions(functions)
            }
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Imp(l, r) | Formula::Iff(l, r) => {
                l.collect_functions(functions);
                r.collect_functions(functions);
            }
        }
    }

    /// Names of constants (0-ary applications) occurring in the formula.
    pub fn constants(&self) -> BTreeSet<String> {
        let mut constants = BTreeSet::new();
        self.collect_constants(&mut constants);
        constants
    }

    /// Function symbols of arity >= 1 occurring in the formula.
    pub fn functions(&self) -> BTreeSet<FnSym> {
        let mut functions = BTreeSet::new();
        self.collect_functions(&mut functions);
        functions
    }

    /// Number of connectives and quantifiers.
    pub fn complexity(&self) -> usize {
        match self {
            Formula::True | Formula::False | Formula::Atom(_) => 0,
            Formula::Not(inner) | Formula::Forall(_, inner) | Formula::Exists(_, inner) => {
                1 + inner.complexity()
            }
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Imp(l, r) | Formula::Iff(l, r) => {
                1 + l.complexity() + r.complexity()
            }
        }
    }

    pub fn quantifier_count(&self) -> usize {
        match self {
            Formula::True | Formula::False | Formula::Atom(_) => 0,
            Formula::Not(inner) => inner.quantifier_count(),
            Formula::Forall(_, inner) | Formula::Exists(_, inner) => 1 + inner.quantifier_count(),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Imp(l, r) | Formula::Iff(l, r) => {
                l.quantifier_count() + r.quantifier_count()
            }
        }
    }

    pub fn is_quantifier_free(&self) -> bool {
        self.quantifier_count() == 0
    }

    pub fn has_imp_or_iff(&self) -> bool {
        match self {
            Formula::True | Formula::False | Formula::Atom(_) => false,
            Formula::Imp(_, _) | Formula::Iff(_, _) => true,
            Formula::Not(inner) | Formula::Forall(_, inner) | Formula::Exists(_, inner) => {
                inner.has_imp_or_iff()
            }
            Formula::And(l, r) | Formula::Or(l, r) => l.has_imp_or_iff() || r.has_imp_or_iff(),
        }
    }

    /// No `Imp`/`Iff`, and every `Not` sits directly over an atom.
    pub fn is_nnf(&self) -> bool {
        match self {
            Formula::True | Formula::False | Formula::Atom(_) => true,
            Formula::Not(inner) => matches!(**inner, Formula::Atom(_)),
            Formula::And(l, r) | Formula::Or(l, r) => l.is_nnf() && r.is_nnf(),
            Formula::Imp(_, _) | Formula::Iff(_, _) => false,
            Formula::Forall(_, inner) | Formula::Exists(_, inner) => inner.is_nnf(),
        }
    }

    /// A (possibly empty) quantifier prefix over a quantifier-free matrix.
    pub fn is_prenex(&self) -> bool {
        match self {
            Formula::Forall(_, inner) | Formula::Exists(_, inner) => inner.is_prenex(),
            other => other.is_quantifier_free(),
        }
    }

    /// Capture-avoiding replacement of the free occurrences of `var` by `term`.
    ///
    /// A binder that would capture a variable of `term` is first renamed to a
    /// variable drawn from `names` that occurs neither in `term` nor in the
    /// quantified formula.
    pub fn substitute(&self, var: &Var, term: &Term, names: &mut NameSupply) -> Formula {
        match self {
            Formula::True | Formula::False => self.clone(),
            Formula::Atom(atom) => Formula::Atom(atom.substitute(var, term)),
            Formula::Not(inner) => Formula::not(inner.substitute(var, term, names)),
            Formula::And(l, r) => Formula::and(
                l.substitute(var, term, names),
                r.substitute(var, term, names),
            ),
            Formula::Or(l, r) => Formula::or(
                l.substitute(var, term, names),
                r.substitute(var, term, names),
            ),
            Formula::Imp(l, r) => Formula::imp(
                l.substitute(var, term, names),
                r.substitute(var, term, names),
            ),
            Formula::Iff(l, r) => Formula::iff(
                l.substitute(var, term, names),
                r.substitute(var, term, names),
            ),
            Formula::Forall(bound, body) => {
                self.substitute_binder(bound, body, var, term, names, Formula::forall)
            }
            Formula::Exists(bound, body) => {
                self.substitute_binder(bound, body, var, term, names, Formula::exists)
            }
        }
    }

    fn substitute_binder(
        &self,
        bound: &Var,
        body: &Formula,
        var: &Var,
        term: &Term,
        names: &mut NameSupply,
        rebuild: fn(Var, Formula) -> Formula,
    ) -> Formula {
        // Shadowed, or nothing to replace underneath.
        if bound == var || !body.contains_var(var, true) {
            return self.clone();
        }
        if term.contains_var(bound) {
            let fresh = names.fresh_variable(term, self);
            let renamed = body.substitute(bound, &Term::Var(fresh.clone()), names);
            rebuild(fresh, renamed.substitute(var, term, names))
        } else {
            rebuild(bound.clone(), body.substitute(var, term, names))
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::True => write!(f, "True"),
            Formula::False => write!(f, "False"),
            Formula::Atom(atom) => write!(f, "{}", atom),
            Formula::Not(inner) => write!(f, "(~{})", inner),
            Formula::And(l, r) => write!(f, "({} /\\ {})", l, r),
            Formula::Or(l, r) => write!(f, "({} \\/ {})", l, r),
            Formula::Imp(l, r) => write!(f, "({} ==> {})", l, r),
            Formula::Iff(l, r) => write!(f, "({} <=> {})", l, r),
            Formula::Forall(v, body) => write!(f, "(A {}).({})", v, body),
            Formula::Exists(v, body) => write!(f, "(E {}).({})", v, body),
        }
    }
}
