use std::collections::BTreeSet;

use super::*;
use crate::herbrand::HerbrandUniverse;

// =============================================================================
// HERBRAND UNIVERSE GROWTH
// =============================================================================

#[test]
fn levels_nest_and_never_duplicate() {
    let mut sig = test_signature();
    let matrix = Formula::and(p(f(a())), r(Term::var("x"), g(Term::var("x"), a())));
    let mut hu = HerbrandUniverse::new(&mut sig, &matrix).unwrap();
    let mut previous: Vec<Term> = hu.level().iter().cloned().collect();
    for _ in 0..2 {
        hu.next_level();
        let current: Vec<Term> = hu.level().iter().cloned().collect();
        assert_eq!(&current[..previous.len()], &previous[..], "Earlier terms keep their place");
        let distinct: BTreeSet<&Term> = current.iter().collect();
        assert_eq!(distinct.len(), current.len());
        previous = current;
    }
}

#[test]
fn seeding_uses_only_constants_of_the_formula() {
    let mut sig = test_signature();
    let matrix = p(f(Term::var("x")));
    let hu = HerbrandUniverse::new(&mut sig, &matrix).unwrap();
    // `a` and `b` are in the signature but not in the formula.
    assert_eq!(hu.len(), 1);
    assert_eq!(hu.to_string(), "{uc1}");
}

#[test]
fn saturated_universe_stops_growing() {
    let mut sig = test_signature();
    let matrix = r(a(), Term::var("x"));
    let mut hu = HerbrandUniverse::new(&mut sig, &matrix).unwrap();
    assert_eq!(hu.next_level(), 0);
    assert_eq!(hu.next_level(), 0);
    assert_eq!(hu.depth(), 2);
    assert_eq!(hu.len(), 1);
}

#[test]
fn growth_depends_on_level_not_on_term_depth() {
    let mut sig = test_signature();
    // f(f(a)) appears in the formula but only `a` seeds the universe.
    let matrix = p(f(f(a())));
    let mut hu = HerbrandUniverse::new(&mut sig, &matrix).unwrap();
    assert!(!hu.contains(&f(f(a()))));
    hu.next_level();
    assert!(hu.contains(&f(a())));
    hu.next_level();
    assert!(hu.contains(&f(f(a()))));
}
