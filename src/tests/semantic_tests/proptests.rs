use std::collections::BTreeSet;

use proptest::prelude::*;

use super::*;
use crate::gilmore::surviving_clauses;
use crate::herbrand::HerbrandUniverse;
use crate::normalize::{list_dnf, nnf, prenex, simplify, skolemize};
use crate::subst::NameSupply;
use crate::syntax::{Atom, FnSym};

// =============================================================================
// PROPERTY-BASED TESTS
// =============================================================================
//
// Generated terms and formulas only use the symbols of `test_signature`, so
// every generated tree is well-formed and can be evaluated in
// `test_structure`.

fn arb_var() -> impl Strategy<Value = Var> {
    prop::sample::select(vec!["x", "y", "z"]).prop_map(Var::new)
}

fn arb_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        arb_var().prop_map(Term::Var),
        prop::sample::select(vec!["a", "b"]).prop_map(|c| Term::App(FnSym::new(c, 0), vec![])),
    ];
    leaf.prop_recursive(2, 8, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|t| Term::App(FnSym::new("f", 1), vec![t])),
            (inner.clone(), inner).prop_map(|(l, r)| Term::App(FnSym::new("g", 2), vec![l, r])),
        ]
    })
}

fn arb_atom() -> impl Strategy<Value = Formula> {
    prop_oneof![
        arb_term().prop_map(|t| Formula::Atom(Atom {
            predicate: "p".to_string(),
            args: vec![t],
        })),
        (arb_term(), arb_term()).prop_map(|(l, r)| Formula::Atom(Atom {
            predicate: "r".to_string(),
            args: vec![l, r],
        })),
    ]
}

fn arb_formula() -> impl Strategy<Value = Formula> {
    let leaf = prop_oneof![
        1 => Just(Formula::True),
        1 => Just(Formula::False),
        6 => arb_atom(),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Formula::not),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::and(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::or(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::imp(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::iff(l, r)),
            (arb_var(), inner.clone()).prop_map(|(v, f)| Formula::forall(v, f)),
            (arb_var(), inner).prop_map(|(v, f)| Formula::exists(v, f)),
        ]
    })
}

/// Quantifier-free formulas over `And`/`Or`/`Not`, small enough for a full DNF.
fn arb_matrix() -> impl Strategy<Value = Formula> {
    let leaf = prop_oneof![
        1 => Just(Formula::True),
        1 => Just(Formula::False),
        6 => arb_atom(),
    ];
    leaf.prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Formula::not),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::and(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Formula::or(l, r)),
        ]
    })
}

// -------------------------------------------------------------------------
// Substituting a variable that is not free changes nothing
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn substitution_of_non_free_variable_is_identity(
        formula in arb_formula(),
        var in arb_var(),
        term in arb_term()
    ) {
        prop_assume!(!formula.contains_var(&var, true));
        let mut names = NameSupply::new();
        prop_assert_eq!(formula.substitute(&var, &term, &mut names), formula);
    }
}

// -------------------------------------------------------------------------
// Free variables after substitution: FV(f) - {v}, plus FV(t) if v was free
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn substitution_never_captures(
        formula in arb_formula(),
        var in arb_var(),
        term in arb_term()
    ) {
        let mut names = NameSupply::new();
        let result = formula.substitute(&var, &term, &mut names);

        let mut expected: BTreeSet<Var> = formula.free_variables();
        let was_free = expected.remove(&var);
        if was_free {
            expected.extend(term.variables());
        }
        prop_assert_eq!(result.free_variables(), expected);
        prop_assert_eq!(result.quantifier_count(), formula.quantifier_count());
        prop_assert_eq!(result.complexity(), formula.complexity());
    }
}

// -------------------------------------------------------------------------
// Substitution commutes with evaluation
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn substitution_lemma_holds_in_structure(
        formula in arb_formula(),
        var in arb_var(),
        term in arb_term()
    ) {
        let structure = test_structure();
        let val = test_valuation(&structure);
        let mut names = NameSupply::new();
        let substituted = formula.substitute(&var, &term, &mut names);

        let mut shifted = val.clone();
        shifted.set(var.clone(), term.eval(&structure, &val).unwrap()).unwrap();
        prop_assert_eq!(
            substituted.eval(&structure, &val).unwrap(),
            formula.eval(&structure, &shifted).unwrap()
        );
    }
}

// -------------------------------------------------------------------------
// NNF: output shape, idempotence, meaning
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn nnf_is_idempotent_and_well_shaped(formula in arb_formula()) {
        let once = nnf(&formula);
        prop_assert!(once.is_nnf());
        prop_assert!(!once.has_imp_or_iff());
        prop_assert_eq!(nnf(&once), once.clone());
        prop_assert_eq!(once.free_variables(), formula.free_variables());
    }
}

proptest! {
    #[test]
    fn nnf_and_simplify_preserve_truth(formula in arb_formula()) {
        let structure = test_structure();
        let val = test_valuation(&structure);
        let expected = formula.eval(&structure, &val).unwrap();
        prop_assert_eq!(nnf(&formula).eval(&structure, &val).unwrap(), expected);
        prop_assert_eq!(simplify(&formula).eval(&structure, &val).unwrap(), expected);
    }
}

// -------------------------------------------------------------------------
// Prenex: output shape, quantifiers only merged, never added; meaning kept
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn prenex_of_nnf_is_prenex_and_equivalent(formula in arb_formula()) {
        let structure = test_structure();
        let val = test_valuation(&structure);
        let mut names = NameSupply::new();
        let normal = nnf(&formula);
        let pre = prenex(&normal, &mut names).unwrap();

        prop_assert!(pre.is_prenex());
        prop_assert!(pre.is_nnf());
        prop_assert!(pre.quantifier_count() <= normal.quantifier_count());
        prop_assert_eq!(pre.free_variables(), normal.free_variables());
        prop_assert_eq!(
            pre.eval(&structure, &val).unwrap(),
            normal.eval(&structure, &val).unwrap()
        );
    }
}

// -------------------------------------------------------------------------
// Skolemization removes every existential, one symbol each
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn skolemization_eliminates_existentials(formula in arb_formula()) {
        let mut sig = test_signature();
        let mut names = NameSupply::new();
        let pre = prenex(&nnf(&formula), &mut names).unwrap();
        let existentials = count_exists(&pre);
        let before = sig.functions().count();

        let sk = skolemize(&pre, &mut sig, &mut names).unwrap();
        prop_assert_eq!(count_exists(&sk), 0);
        prop_assert_eq!(sk.quantifier_count(), pre.quantifier_count() - existentials);
        prop_assert_eq!(sig.functions().count(), before + existentials);
        prop_assert!(sk.is_prenex());
    }
}

// -------------------------------------------------------------------------
// Herbrand growth is monotone and duplicate-free
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn herbrand_growth_is_monotone(formula in arb_matrix()) {
        let mut sig = test_signature();
        let mut hu = HerbrandUniverse::new(&mut sig, &formula).unwrap();
        prop_assert!(!hu.is_empty());
        for _ in 0..2 {
            let before: Vec<Term> = hu.level().iter().cloned().collect();
            let added = hu.next_level();
            prop_assert_eq!(hu.len(), before.len() + added);
            prop_assert!(before.iter().all(|t| hu.contains(t)));
            let distinct: BTreeSet<&Term> = hu.level().iter().collect();
            prop_assert_eq!(distinct.len(), hu.len());
            prop_assert!(hu.level().iter().all(Term::is_ground));
        }
    }
}

// -------------------------------------------------------------------------
// Pruned elimination agrees with the full DNF scan
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn pruned_elimination_matches_full_dnf(left in arb_matrix(), right in arb_matrix()) {
        let left = nnf(&left);
        let right = nnf(&right);
        let full = list_dnf(&Formula::and(left.clone(), right.clone())).unwrap();
        let full_consistent = full.iter().any(|c| !c.is_contradictory());
        let pruned = surviving_clauses(&[left, right]).unwrap();
        prop_assert_eq!(!pruned.is_empty(), full_consistent);
        prop_assert!(pruned.iter().all(|c| !c.is_contradictory()));
    }
}
