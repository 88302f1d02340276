use std::collections::BTreeSet;

use super::*;
use crate::subst::{NameSupply, Substitution};

// =============================================================================
// CAPTURE-AVOIDING SUBSTITUTION
// =============================================================================

// -------------------------------------------------------------------------
// A binder on the substituted variable shadows it entirely.
// -------------------------------------------------------------------------
#[test]
fn bound_variable_is_not_replaced() {
    let mut names = NameSupply::new();
    let formula = Formula::forall(v("x"), p(Term::var("x")));
    let result = formula.substitute(&v("x"), &f(Term::var("x")), &mut names);
    assert_eq!(result, formula);
    assert_eq!(names.issued(), 0, "No renaming is needed under a shadowing binder");
}

// -------------------------------------------------------------------------
// (A y).r(x,y) with x := f(y): the incoming y must stay free.
// -------------------------------------------------------------------------
#[test]
fn incoming_variable_is_never_captured() {
    let mut names = NameSupply::new();
    let formula = Formula::forall(v("y"), r(Term::var("x"), Term::var("y")));
    let result = formula.substitute(&v("x"), &f(Term::var("y")), &mut names);

    assert_eq!(result.free_variables(), BTreeSet::from([v("y")]));
    match &result {
        Formula::Forall(bound, body) => {
            assert_ne!(bound, &v("y"), "Binder must be renamed");
            assert_eq!(**body, r(f(Term::var("y")), Term::Var(bound.clone())));
        }
        other => panic!("Expected a universal quantifier, got {}", other),
    }
}

// -------------------------------------------------------------------------
// The outer y, free outside the binder, stays free alongside.
// -------------------------------------------------------------------------
#[test]
fn outer_free_occurrence_survives_renaming() {
    let mut names = NameSupply::new();
    let formula = Formula::and(
        p(Term::var("y")),
        Formula::exists(v("y"), r(Term::var("x"), Term::var("y"))),
    );
    let result = formula.substitute(&v("x"), &g(Term::var("y"), a()), &mut names);
    assert_eq!(result.free_variables(), BTreeSet::from([v("y")]));
    assert_eq!(result.quantifier_count(), 1);
}

// -------------------------------------------------------------------------
// Fresh names avoid names already bound deeper in the formula.
// -------------------------------------------------------------------------
#[test]
fn fresh_name_avoids_existing_binders() {
    let mut names = NameSupply::new();
    let formula = Formula::forall(
        v("y"),
        Formula::exists(v("uv1"), r(Term::var("x"), g(Term::var("y"), Term::var("uv1")))),
    );
    let result = formula.substitute(&v("x"), &Term::var("y"), &mut names);
    match &result {
        Formula::Forall(bound, _) => assert_eq!(bound, &v("uv2")),
        other => panic!("Expected a universal quantifier, got {}", other),
    }
    assert_eq!(result.free_variables(), BTreeSet::from([v("y")]));
}

// -------------------------------------------------------------------------
// Separate proof attempts own separate supplies, so names repeat exactly.
// -------------------------------------------------------------------------
#[test]
fn renaming_is_attempt_local() {
    let formula = Formula::forall(v("y"), r(Term::var("x"), Term::var("y")));
    let first = formula.substitute(&v("x"), &Term::var("y"), &mut NameSupply::new());
    let second = formula.substitute(&v("x"), &Term::var("y"), &mut NameSupply::new());
    assert_eq!(first, second);
}

// =============================================================================
// MULTI-BINDING SUBSTITUTIONS
// =============================================================================

#[test]
fn ground_substitution_closes_matrix() {
    let mut names = NameSupply::new();
    let matrix = Formula::or(r(Term::var("x"), Term::var("y")), p(f(Term::var("x"))));
    let sigma: Substitution = [(v("x"), a()), (v("y"), f(a()))].into_iter().collect();
    let ground = sigma.apply_to_formula(&matrix, &mut names);
    assert!(ground.free_variables().is_empty());
    assert_eq!(ground, Formula::or(r(a(), f(a())), p(f(a()))));
}

#[test]
fn empty_substitution_is_identity_on_formulas() {
    let mut names = NameSupply::new();
    let formula = Formula::exists(v("x"), r(Term::var("x"), Term::var("y")));
    assert_eq!(Substitution::empty().apply_to_formula(&formula, &mut names), formula);
}
