//! First-order terms: variables and function applications (including 0-ary constants).

use std::collections::BTreeSet;
use std::fmt;

use super::Signature;
use crate::error::LogicResult;

/// A variable, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var {
    name: String,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Var { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A function symbol with its arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FnSym {
    pub name: String,
    pub arity: usize,
}

impl FnSym {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FnSym {
            name: name.into(),
            arity,
        }
    }
}

/// A first-order term.
///
/// Equality is structural: same symbol and pairwise equal operands.
/// Build applications through [`Term::app`] / [`Term::constant`] to have the
/// arity checked against a [`Signature`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// A variable
    Var(Var),
    /// Function application: f(t1, ..., tn)
    App(FnSym, Vec<Term>),
}

impl Term {
    /// Create a variable term.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(Var::new(name))
    }

    /// Create a function application, checking the symbol's arity.
    pub fn app(sig: &Signature, name: impl Into<String>, args: Vec<Term>) -> LogicResult<Self> {
        let name = name.into();
        let arity = sig.require_function(&name, args.len())?;
        Ok(Term::App(FnSym::new(name, arity), args))
    }

    /// Create a constant (0-ary application), checking the signature.
    pub fn constant(sig: &Signature, name: impl Into<String>) -> LogicResult<Self> {
        Term::app(sig, name, Vec::new())
    }

    /// Accumulate every variable of this term into `vars`.
    pub fn collect_vars(&self, vars: &mut BTreeSet<Var>) {
        match self {
            Term::Var(v) => {
                vars.insert(v.clone());
            }
            Term::App(_, args) => {
                for arg in args {
                    arg.collect_vars(vars);
                }
            }
        }
    }

    /// All variables occurring in this term.
    pub fn variables(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    /// Names of 0-ary applications reachable anywhere in the term.
    pub fn collect_constants(&self, constants: &mut BTreeSet<String>) {
        if let Term::App(sym, args) = self {
            if args.is_empty() {
                constants.insert(sym.name.clone());
            }
            for arg in args {
                arg.collect_constants(constants);
            }
        }
    }

    /// Head symbols of applications with arity >= 1, including nested ones.
    pub fn collect_functions(&self, functions: &mut BTreeSet<FnSym>) {
        if let Term::App(sym, args) = self {
            if !args.is_empty() {
                functions.insert(sym.clone());
            }
            for arg in args {
                arg.collect_functions(functions);
            }
        }
    }

    pub fn contains_var(&self, var: &Var) -> bool {
        match self {
            Term::Var(v) => v == var,
            Term::App(_, args) => args.iter().any(|arg| arg.contains_var(var)),
        }
    }

    /// Check if this term contains no variables.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::App(_, args) => args.iter().all(|arg| arg.is_ground()),
        }
    }

    /// Replace every occurrence of `var` by `term`.
    pub fn substitute(&self, var: &Var, term: &Term) -> Term {
        match self {
            Term::Var(v) if v == var => term.clone(),
            Term::Var(_) => self.clone(),
            Term::App(sym, args) => Term::App(
                sym.clone(),
                args.iter().map(|arg| arg.substitute(var, term)).collect(),
            ),
        }
    }

    /// Function name or constant name; `None` for variables.
    pub fn root_symbol(&self) -> Option<&str> {
        match self {
            Term::Var(_) => None,
            Term::App(sym, _) => Some(&sym.name),
        }
    }
}

/// Write `name` or `name(a1,...,an)`.
pub(crate) fn write_application(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    args: &[Term],
) -> fmt::Result {
    write!(f, "{}", name)?;
    if !args.is_empty() {
        write!(f, "(")?;
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")?;
    }
    Ok(())
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(var) => write!(f, "{}", var),
            Term::App(sym, args) => write_application(f, &sym.name, args),
        }
    }
}
